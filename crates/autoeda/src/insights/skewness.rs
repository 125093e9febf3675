//! Skewness of numeric columns.

use serde::{Deserialize, Serialize};

use super::detector::{Detector, InsightCategory};
use crate::config::SkewnessConfig;
use crate::error::Result;
use crate::stats::{descending, skewness};
use crate::table::Table;

/// Skewness of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkewnessRow {
    pub column: String,
    pub skewness: f64,
    /// Whether `|skewness|` is above the configured threshold.
    pub flagged: bool,
}

impl SkewnessRow {
    /// `"right"` for positive skew, `"left"` otherwise.
    pub fn direction(&self) -> &'static str {
        if self.skewness > 0.0 { "right" } else { "left" }
    }

    pub fn message(&self) -> String {
        format!(
            "Column '{}' is {}-skewed (skewness={:.2}), which may affect mean-based analyses.",
            self.column,
            self.direction(),
            self.skewness
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkewnessDetector {
    config: SkewnessConfig,
}

impl SkewnessDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SkewnessConfig) -> Self {
        Self { config }
    }

    /// Skewness of every numeric column with at least three present values,
    /// largest magnitude first.
    pub fn detect_skewness(&self, table: &Table) -> Vec<SkewnessRow> {
        let mut rows: Vec<SkewnessRow> = table
            .columns()
            .iter()
            .filter(|c| c.column_type().is_numeric())
            .filter_map(|column| {
                let value = skewness(&column.present_numbers())?;
                Some(SkewnessRow {
                    column: column.name.clone(),
                    skewness: value,
                    flagged: value.abs() > self.config.threshold,
                })
            })
            .collect();

        rows.sort_by(|a, b| descending(a.skewness.abs(), b.skewness.abs()));
        rows
    }
}

impl Detector for SkewnessDetector {
    type Row = SkewnessRow;

    fn category(&self) -> InsightCategory {
        InsightCategory::Skewness
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn rows(&self, table: &Table) -> Vec<SkewnessRow> {
        self.detect_skewness(table)
    }

    fn messages(&self, rows: &[SkewnessRow]) -> Vec<String> {
        rows.iter().filter(|r| r.flagged).map(SkewnessRow::message).collect()
    }
}
