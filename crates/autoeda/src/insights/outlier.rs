//! Outlier detection by interquartile range and z-score.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::detector::{Detector, InsightCategory};
use crate::config::OutlierConfig;
use crate::error::Result;
use crate::stats::{descending, percentage, quantile, round2, sorted, Moments};
use crate::table::Table;

/// How an outlier count was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlierMethod {
    #[serde(rename = "IQR")]
    Iqr,
    #[serde(rename = "Z-score")]
    ZScore,
}

impl OutlierMethod {
    pub fn label(&self) -> &'static str {
        match self {
            OutlierMethod::Iqr => "IQR",
            OutlierMethod::ZScore => "Z-score",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tukey fences computed from the quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Fences for present values, or `None` when there are none.
    pub fn from_values(values: &[f64], multiplier: f64) -> Option<Self> {
        let ordered = sorted(values);
        let q1 = quantile(&ordered, 0.25)?;
        let q3 = quantile(&ordered, 0.75)?;
        let iqr = q3 - q1;
        Some(Self {
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        })
    }

    /// Whether a value lies strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// One outlier count for one column and method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierRow {
    pub column: String,
    pub method: OutlierMethod,
    pub outlier_count: usize,
    /// Rounded to 2 decimals. IQR divides by all rows, z-score by present values.
    pub outlier_pct: f64,
    /// Whether `outlier_pct` is above the configured insight percentage.
    pub flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<IqrBounds>,
}

impl OutlierRow {
    /// Insight message for this row.
    pub fn message(&self) -> String {
        format!(
            "Column '{}' has {:.2}% outliers detected by {}.",
            self.column, self.outlier_pct, self.method
        )
    }
}

/// Counts outliers in every numeric column with both methods.
#[derive(Debug, Clone, Default)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutlierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutlierConfig {
        &self.config
    }

    /// IQR counts, highest percentage first.
    ///
    /// Every numeric column yields a row, including all-missing ones (count 0).
    /// A table with no rows yields nothing.
    pub fn detect_iqr(&self, table: &Table) -> Vec<OutlierRow> {
        let rows = table.row_count();
        if rows == 0 {
            return Vec::new();
        }

        let mut out: Vec<OutlierRow> = table
            .columns()
            .iter()
            .filter(|c| c.column_type().is_numeric())
            .map(|column| {
                let values = column.present_numbers();
                let bounds = IqrBounds::from_values(&values, self.config.iqr_multiplier);
                let count = bounds.map_or(0, |b| {
                    values.iter().filter(|&&v| b.is_outlier(v)).count()
                });
                self.row(&column.name, OutlierMethod::Iqr, count, rows, bounds)
            })
            .collect();

        sort_rows(&mut out);
        out
    }

    /// Z-score counts, highest percentage first.
    ///
    /// Uses the population standard deviation. Columns without present values
    /// are skipped; a constant column counts 0.
    pub fn detect_zscore(&self, table: &Table) -> Vec<OutlierRow> {
        let mut out: Vec<OutlierRow> = table
            .columns()
            .iter()
            .filter(|c| c.column_type().is_numeric())
            .filter_map(|column| {
                let values = column.present_numbers();
                let moments = Moments::from_values(&values);
                let mean = moments.mean()?;
                let std = moments.population_std()?;

                let count = if std > 0.0 {
                    values
                        .iter()
                        .filter(|&&v| ((v - mean) / std).abs() > self.config.z_threshold)
                        .count()
                } else {
                    0
                };
                Some(self.row(
                    &column.name,
                    OutlierMethod::ZScore,
                    count,
                    moments.count(),
                    None,
                ))
            })
            .collect();

        sort_rows(&mut out);
        out
    }

    /// Both methods combined.
    pub fn summary(&self, table: &Table) -> OutlierSummary {
        let mut rows = self.detect_iqr(table);
        rows.extend(self.detect_zscore(table));
        sort_rows(&mut rows);
        OutlierSummary { rows }
    }

    fn row(
        &self,
        column: &str,
        method: OutlierMethod,
        count: usize,
        denominator: usize,
        bounds: Option<IqrBounds>,
    ) -> OutlierRow {
        let pct = round2(percentage(count, denominator));
        OutlierRow {
            column: column.to_string(),
            method,
            outlier_count: count,
            outlier_pct: pct,
            flagged: pct > self.config.insight_pct,
            bounds,
        }
    }
}

impl Detector for OutlierDetector {
    type Row = OutlierRow;

    fn category(&self) -> InsightCategory {
        InsightCategory::Outliers
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn rows(&self, table: &Table) -> Vec<OutlierRow> {
        self.summary(table).rows
    }

    fn messages(&self, rows: &[OutlierRow]) -> Vec<String> {
        rows.iter().filter(|r| r.flagged).map(OutlierRow::message).collect()
    }
}

/// IQR and z-score rows for a table, highest percentage first.
///
/// A column appears once per method, so it may be reported twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub rows: Vec<OutlierRow>,
}

impl OutlierSummary {
    /// The worst row per column, keeping the overall order.
    pub fn per_column(&self) -> Vec<&OutlierRow> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.column.as_str()))
            .collect()
    }

    /// Rows above the insight percentage.
    pub fn flagged(&self) -> impl Iterator<Item = &OutlierRow> {
        self.rows.iter().filter(|r| r.flagged)
    }
}

fn sort_rows(rows: &mut [OutlierRow]) {
    rows.sort_by(|a, b| descending(a.outlier_pct, b.outlier_pct));
}
