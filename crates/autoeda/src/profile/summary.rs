//! Descriptive statistics per column.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::stats::{percentage, quantile, round2, sorted, Moments};
use crate::table::{Column, ColumnType, Table};

/// Descriptive statistics for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    /// Sample standard deviation; undefined for fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    pub max: f64,
}

/// Frequency statistics for non-numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Number of distinct non-missing values.
    pub unique: usize,
    /// Most frequent value; first seen wins ties.
    pub top: String,
    /// Occurrences of `top`.
    pub freq: usize,
}

/// Summary row for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub dtype: ColumnType,
    /// Non-missing values.
    pub count: usize,
    /// Percentage of rows missing, rounded to 2 decimals.
    pub missing_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<CategoricalSummary>,
}

/// Summarize every column of a table. Floats are rounded to 2 decimals.
pub fn generate_summary(table: &Table) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .map(|column| summarize_column(column, table.row_count()))
        .collect()
}

fn summarize_column(column: &Column, rows: usize) -> ColumnSummary {
    let missing = column.missing_count();
    let (numeric, categorical) = if column.column_type().is_numeric() {
        (numeric_summary(&column.present_numbers()), None)
    } else {
        (None, categorical_summary(column))
    };

    ColumnSummary {
        column: column.name.clone(),
        dtype: column.column_type(),
        count: rows - missing,
        missing_pct: round2(percentage(missing, rows)),
        numeric,
        categorical,
    }
}

fn numeric_summary(values: &[f64]) -> Option<NumericSummary> {
    let moments = Moments::from_values(values);
    let ordered = sorted(values);

    Some(NumericSummary {
        mean: round2(moments.mean()?),
        std: moments.sample_std().map(round2),
        min: round2(moments.min()?),
        q1: round2(quantile(&ordered, 0.25)?),
        median: round2(quantile(&ordered, 0.5)?),
        q3: round2(quantile(&ordered, 0.75)?),
        max: round2(moments.max()?),
    })
}

fn categorical_summary(column: &Column) -> Option<CategoricalSummary> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for row in 0..column.len() {
        if let Some(value) = column.data.display_value(row) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&String, usize)> = None;
    for (value, &count) in &counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((value, count));
        }
    }

    best.map(|(top, freq)| CategoricalSummary {
        unique: counts.len(),
        top: top.clone(),
        freq,
    })
}
