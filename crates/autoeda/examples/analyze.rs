//! Example: Analyze a tabular data file with AutoEDA.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- data/sales.csv

use std::env;
use std::path::Path;

use autoeda::Explorer;

fn main() -> autoeda::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- data/sales.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("AutoEDA Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let result = Explorer::new().analyze_path(path)?;

    if let Some(source) = &result.source {
        println!("## Source Metadata");
        println!("  File: {}", source.file);
        println!("  Format: {}", source.format);
        println!("  Rows: {}", source.row_count);
        println!("  Columns: {}", source.column_count);
        println!();
    }

    println!("## Column Types");
    println!();
    for (kind, names) in result.column_types.buckets() {
        println!("  {:12} {}", kind.label(), names.join(", "));
    }
    println!();

    println!("## Summary ({} columns)", result.summary.len());
    println!();
    for col in &result.summary {
        print!(
            "  {:20} {:10} count={:<6} missing={:>6.2}%",
            col.column,
            col.dtype.label(),
            col.count,
            col.missing_pct
        );
        if let Some(n) = &col.numeric {
            print!("  mean={} median={} max={}", n.mean, n.median, n.max);
        }
        if let Some(c) = &col.categorical {
            print!("  unique={} top={:?}", c.unique, c.top);
        }
        println!();
    }
    println!();

    if !result.missing_flags.is_empty() {
        println!("## Missing Values ({} flagged)", result.missing_flags.len());
        for row in &result.missing_flags {
            println!("  {:20} {:>6.2}%", row.column, row.missing_pct);
        }
        println!();
    }

    println!("## Insights ({} total)", result.insights.total());
    println!();
    for (category, messages) in result.insights.iter() {
        println!("### {} ({}):", category, messages.len());
        for message in messages {
            println!("  - {}", message);
        }
        println!();
    }

    println!("{}", separator);

    Ok(())
}
