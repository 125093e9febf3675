//! Missing command - report missing values per column.

use std::path::PathBuf;

use autoeda::config::MissingConfig;
use autoeda::{flag_missing, missing_value_report};
use colored::Colorize;

use super::load_table;

pub fn run(
    file: PathBuf,
    threshold: Option<f64>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_table(&file)?;

    let rows = match threshold {
        Some(threshold) => {
            MissingConfig { threshold }.validate()?;
            flag_missing(&table, threshold)
        }
        None => missing_value_report(&table),
    };

    if rows.is_empty() {
        println!("{}", "No missing values to report.".green());
        return Ok(());
    }

    println!("{}", "Missing values:".yellow().bold());
    println!("  {:24} {:>8} {:>9}", "Column", "Missing", "Percent");
    for row in &rows {
        let pct = format!("{:.2}%", row.missing_pct);
        let pct = if row.missing_pct >= 50.0 {
            pct.red()
        } else {
            pct.yellow()
        };
        println!("  {:24} {:>8} {:>9}", row.column, row.missing_count, pct);
    }

    Ok(())
}
