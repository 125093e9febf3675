//! Uniqueness ratio per column.

use serde::{Deserialize, Serialize};

use super::detector::{Detector, InsightCategory};
use crate::config::CardinalityConfig;
use crate::error::Result;
use crate::stats::{descending, round2};
use crate::table::Table;

/// Distinct-value figures for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardinalityRow {
    pub column: String,
    /// Distinct values, counting missing as one value.
    pub unique_count: usize,
    /// `unique_count / rows * 100`, rounded to 2 decimals.
    pub uniqueness_pct: f64,
    /// Whether the displayed percentage is above the configured threshold,
    /// so a flagged row never prints as exactly the threshold.
    pub flagged: bool,
}

impl CardinalityRow {
    pub fn message(&self) -> String {
        format!(
            "Column '{}' has {:.2}% unique values — may behave like an identifier.",
            self.column, self.uniqueness_pct
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardinalityDetector {
    config: CardinalityConfig,
}

impl CardinalityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CardinalityConfig) -> Self {
        Self { config }
    }

    /// Uniqueness of every column, highest first. Empty for a table with no rows.
    pub fn detect_cardinality(&self, table: &Table) -> Vec<CardinalityRow> {
        let rows = table.row_count();
        if rows == 0 {
            return Vec::new();
        }

        let threshold_pct = self.config.threshold * 100.0;
        let mut out: Vec<CardinalityRow> = table
            .columns()
            .iter()
            .map(|column| {
                let unique = column.data.distinct_count(true);
                let uniqueness_pct = round2(unique as f64 / rows as f64 * 100.0);
                CardinalityRow {
                    column: column.name.clone(),
                    unique_count: unique,
                    uniqueness_pct,
                    flagged: uniqueness_pct > threshold_pct,
                }
            })
            .collect();

        out.sort_by(|a, b| descending(a.uniqueness_pct, b.uniqueness_pct));
        out
    }

    /// Only the columns above the threshold.
    pub fn high_cardinality(&self, table: &Table) -> Vec<CardinalityRow> {
        self.detect_cardinality(table)
            .into_iter()
            .filter(|r| r.flagged)
            .collect()
    }
}

impl Detector for CardinalityDetector {
    type Row = CardinalityRow;

    fn category(&self) -> InsightCategory {
        InsightCategory::Cardinality
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn rows(&self, table: &Table) -> Vec<CardinalityRow> {
        self.detect_cardinality(table)
    }

    fn messages(&self, rows: &[CardinalityRow]) -> Vec<String> {
        rows.iter()
            .filter(|r| r.flagged)
            .map(CardinalityRow::message)
            .collect()
    }
}
