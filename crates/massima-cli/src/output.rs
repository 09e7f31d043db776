//! Terminal output formatting.

use colored::Colorize;
use massima_core::analysis::{Analysis, Outcome};

/// Print a single analysis.
pub fn print_analysis(analysis: &Analysis) {
    println!();
    println!("{}", analysis.judge.cyan().bold());
    println!("{}", analysis.header_badge().dimmed());
    println!();

    let outcome = match analysis.outcome {
        Outcome::Favorevole => analysis.outcome.as_str().green().bold(),
        Outcome::Sfavorevole => analysis.outcome.as_str().red().bold(),
        Outcome::Parziale | Outcome::Rinvio | Outcome::Unknown => {
            analysis.outcome.as_str().yellow().bold()
        }
    };
    println!("{}: {}", "Esito".bold(), outcome);
    println!("{}: {}", "Anno".bold(), analysis.year);
    println!();
    println!("{}", analysis.summary);

    if !analysis.key_points.is_empty() {
        println!();
        println!("{}", "Punti chiave".bold());
        for (i, point) in analysis.key_points.iter().enumerate() {
            println!("  {}. {}", i + 1, point);
        }
    }

    if !analysis.legal_references.is_empty() {
        println!();
        println!("{}", "Riferimenti normativi".bold());
        for reference in &analysis.legal_references {
            println!("  - {}", reference);
        }
    }
}
