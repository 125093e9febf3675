//! CLI argument definitions using clap.

use autoeda::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AutoEDA: automated exploratory data analysis
#[derive(Parser)]
#[command(name = "autoeda")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis and write a report
    Analyze {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the report (default: <file>.eda.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format (json, html, csv)
        #[arg(short, long, default_value = "json")]
        format: ReportFormat,

        /// JSON file overriding analysis thresholds
        #[arg(long)]
        config: Option<PathBuf>,

        /// Run detectors on the table as loaded, without imputation or encoding
        #[arg(long)]
        raw: bool,
    },

    /// Show how each column is classified
    Types {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Report missing values per column
    Missing {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only list columns whose missing fraction (0-1) exceeds this value
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Print descriptive statistics for every column
    Summary {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as CSV
        #[arg(long)]
        csv: bool,
    },

    /// Print insight messages by category
    Insights {
        /// Path to the data file (CSV/TSV/XLSX)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file overriding analysis thresholds
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
