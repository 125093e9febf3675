//! Insights command - print insight messages by category.

use std::path::PathBuf;

use autoeda::Explorer;
use colored::Colorize;

use super::{ensure_exists, load_config};

pub fn run(
    file: PathBuf,
    config: Option<PathBuf>,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let explorer = Explorer::with_config(load_config(config)?);
    let result = explorer.analyze_path(&file)?;

    if json_output {
        let output = serde_json::json!({
            "missing": result.missing_flags,
            "insights": result.insights,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Insights for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    println!("{}", "Missing values".yellow().bold());
    if result.missing_flags.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for row in &result.missing_flags {
        println!(
            "  Column '{}' has {:.2}% missing values.",
            row.column,
            row.missing_pct
        );
    }

    for (category, messages) in result.insights.iter() {
        println!();
        println!("{}", category.label().yellow().bold());
        if messages.is_empty() {
            println!("  {}", "none".dimmed());
        }
        for message in messages {
            println!("  {}", message);
        }
    }

    Ok(())
}
