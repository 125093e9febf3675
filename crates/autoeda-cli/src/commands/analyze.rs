//! Analyze command - run the full analysis and write a report.

use std::path::PathBuf;

use autoeda::report::write_report;
use autoeda::{Explorer, ReportFormat};
use colored::Colorize;
use tracing::debug;

use super::{ensure_exists, load_config};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: ReportFormat,
    config: Option<PathBuf>,
    raw: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        file.display().to_string().white()
    );

    let mut config = load_config(config)?;
    if raw {
        config.preprocess = false;
    }
    let explorer = Explorer::with_config(config);
    let result = explorer.analyze_path(&file)?;

    if verbose {
        println!();
        println!("{}", "Column types:".yellow().bold());
        for (kind, names) in result.column_types.buckets() {
            if !names.is_empty() {
                println!("  {:12} {}", kind.label(), names.join(", "));
            }
        }
        println!();
    }

    println!(
        "Loaded {} rows x {} columns",
        result.rows.to_string().white().bold(),
        result.columns.to_string().white().bold()
    );
    println!(
        "Found {} insights and {} columns with heavy missing values",
        result.insights.total().to_string().white().bold(),
        result.missing_flags.len().to_string().yellow()
    );

    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}.eda.{}", stem, format.extension()))
    });

    debug!(output = %output_path.display(), %format, "writing report");
    write_report(&result, format, &output_path)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    if !result.has_findings() {
        println!("{}", "No issues found - data looks clean!".green());
    } else {
        println!(
            "Run {} to list the findings",
            format!("autoeda insights {}", file.display()).cyan().bold()
        );
    }

    Ok(())
}
