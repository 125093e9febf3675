//! Types command - show how each column is classified.

use std::path::PathBuf;

use autoeda::detect_column_types;
use colored::Colorize;

use super::load_table;

pub fn run(file: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_table(&file)?;
    let types = detect_column_types(&table);

    println!(
        "{} {}",
        "Column types for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    for (kind, names) in types.buckets() {
        println!(
            "{} ({})",
            kind.label().yellow().bold(),
            names.len().to_string().white()
        );
        for name in names {
            if verbose {
                let storage = table
                    .column(name)
                    .map(|c| c.column_type().label())
                    .unwrap_or_default();
                println!("  {:24} {}", name, storage.dimmed());
            } else {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
