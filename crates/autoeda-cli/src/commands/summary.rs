//! Summary command - descriptive statistics for every column.

use std::path::PathBuf;

use autoeda::generate_summary;
use autoeda::report::summary_to_csv;
use colored::Colorize;

use super::load_table;

pub fn run(file: PathBuf, csv: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_table(&file)?;
    let summary = generate_summary(&table);

    if csv {
        print!("{}", summary_to_csv(&summary)?);
        return Ok(());
    }

    for row in &summary {
        println!(
            "{} {} ({} present, {:.2}% missing)",
            row.column.cyan().bold(),
            row.dtype.label().dimmed(),
            row.count,
            row.missing_pct
        );
        if let Some(n) = &row.numeric {
            let std = n.std.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
            println!("  mean {}  std {}", n.mean, std);
            println!(
                "  min {}  25% {}  50% {}  75% {}  max {}",
                n.min, n.q1, n.median, n.q3, n.max
            );
        }
        if let Some(c) = &row.categorical {
            println!("  unique {}  top {:?} ({})", c.unique, c.top, c.freq);
        }
    }

    Ok(())
}
