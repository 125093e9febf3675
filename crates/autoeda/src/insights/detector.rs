//! The detector seam shared by all insight passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::Table;

/// Category an insight message is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightCategory {
    Outliers,
    Skewness,
    Cardinality,
    Correlation,
}

impl InsightCategory {
    /// All categories in report order.
    pub const ALL: [InsightCategory; 4] = [
        InsightCategory::Outliers,
        InsightCategory::Skewness,
        InsightCategory::Cardinality,
        InsightCategory::Correlation,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InsightCategory::Outliers => "Outliers",
            InsightCategory::Skewness => "Skewness",
            InsightCategory::Cardinality => "Cardinality",
            InsightCategory::Correlation => "Correlation",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw rows and derived messages from one detector run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection<R> {
    /// Quantitative findings, sorted as the detector specifies.
    pub rows: Vec<R>,
    /// Human-readable messages for the flagged rows.
    pub insights: Vec<String>,
}

impl<R> Default for Detection<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            insights: Vec::new(),
        }
    }
}

/// A stateless statistical pass over a table.
///
/// Implementations only read the table. `rows` must never fail: columns a
/// statistic is undefined for are left out. Invalid configuration is the one
/// failure path and is reported by `validate`.
pub trait Detector {
    /// Row type of the detector's raw result table.
    type Row: Serialize;

    /// Category this detector's messages belong to.
    fn category(&self) -> InsightCategory;

    /// Check the detector's thresholds.
    fn validate(&self) -> Result<()>;

    /// Compute the raw result table.
    fn rows(&self, table: &Table) -> Vec<Self::Row>;

    /// Render messages for the flagged rows.
    fn messages(&self, rows: &[Self::Row]) -> Vec<String>;

    /// Validate, compute rows and render messages.
    fn detect(&self, table: &Table) -> Result<Detection<Self::Row>> {
        self.validate()?;
        let rows = self.rows(table);
        let insights = self.messages(&rows);
        Ok(Detection { rows, insights })
    }
}
