//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use massima_ai::GeminiClient;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to massima-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let analyzer = Arc::new(GeminiClient::from_env());

    println!();
    println!("  {} {}", "MASSIMA".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Analisi".green(),
        args.host,
        args.port
    );
    println!(
        "  {}   http://{}:{}/script",
        "Script".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    massima_web::run_server(analyzer, &args.host, args.port).await?;

    Ok(())
}
