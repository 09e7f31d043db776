//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod serve;

/// Massima - Analisi di sentenze tributarie con AI generativa
#[derive(Parser)]
#[command(name = "massima")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a judgment text from a file or stdin
    Analyze(analyze::AnalyzeArgs),

    /// Start the web server
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Serve(args) => serve::execute(args).await,
        }
    }
}
