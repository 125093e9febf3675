//! Error types for the AutoEDA library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for AutoEDA operations.
#[derive(Debug, Error)]
pub enum EdaError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the spreadsheet reader.
    #[error("Excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Columns of a table have different lengths.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Two columns share the same name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Invalid threshold or other configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for AutoEDA operations.
pub type Result<T> = std::result::Result<T, EdaError>;
