//! AutoEDA: automated exploratory data analysis for tabular datasets.
//!
//! AutoEDA loads a delimited file into a typed table, profiles every column
//! and runs a set of statistical detectors that turn the numbers into short,
//! human-readable findings.
//!
//! # Pipeline
//!
//! - **Profiling**: column kinds, missing values and descriptive statistics on
//!   the table as loaded
//! - **Preprocessing**: median and placeholder imputation plus label encoding
//! - **Insights**: outliers (IQR and z-score), skewness, cardinality and
//!   correlation, aggregated into one report by category
//!
//! Analysis never modifies the input table.
//!
//! # Example
//!
//! ```no_run
//! use autoeda::Explorer;
//!
//! let explorer = Explorer::new();
//! let result = explorer.analyze_path("sales.csv").unwrap();
//!
//! println!("Columns: {}", result.columns);
//! for (category, messages) in result.insights.iter() {
//!     println!("{category}: {} findings", messages.len());
//! }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod insights;
pub mod preprocess;
pub mod profile;
pub mod report;
pub mod table;

mod explorer;
mod stats;

pub use config::EdaConfig;
pub use error::{EdaError, Result};
pub use explorer::{AnalysisResult, Explorer};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use insights::{generate_all_insights, InsightCategory, InsightEngine, InsightReport};
pub use profile::{
    detect_column_types, flag_missing, generate_summary, missing_value_report, ColumnTypes,
};
pub use report::ReportFormat;
pub use table::{Column, ColumnData, ColumnType, Table};
