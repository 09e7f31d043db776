//! One-shot analysis command.

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use massima_ai::{Analyzer, GeminiClient};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// File with the judgment text (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Print the raw JSON payload instead of the formatted view
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let text = text.trim();
    if text.is_empty() {
        bail!("Empty judgment text: pass a file or pipe the text on stdin");
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Analisi in corso...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = GeminiClient::from_env();
    let result = client.analyze(text).await;
    spinner.finish_and_clear();

    let analysis =
        result.context("Errore durante l'analisi. Verifica la tua API Key o riprova più tardi")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        output::print_analysis(&analysis);
    }

    Ok(())
}
