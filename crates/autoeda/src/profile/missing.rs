//! Missing-value reporting.

use serde::{Deserialize, Serialize};

use crate::stats::{descending, percentage, round2};
use crate::table::Table;

/// Missing-value figures for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingRow {
    pub column: String,
    pub missing_count: usize,
    /// Percentage of rows missing, rounded to 2 decimals.
    pub missing_pct: f64,
}

/// Columns with at least one missing value, worst first.
pub fn missing_value_report(table: &Table) -> Vec<MissingRow> {
    collect(table, |count| count > 0)
}

/// Columns whose missing fraction is strictly above `threshold` (0-1),
/// worst first.
pub fn flag_missing(table: &Table, threshold: f64) -> Vec<MissingRow> {
    let rows = table.row_count();
    collect(table, |count| rows > 0 && count as f64 / rows as f64 > threshold)
}

fn collect(table: &Table, keep: impl Fn(usize) -> bool) -> Vec<MissingRow> {
    let rows = table.row_count();

    let mut report: Vec<(MissingRow, f64)> = table
        .columns()
        .iter()
        .filter_map(|column| {
            let count = column.missing_count();
            keep(count).then(|| {
                let pct = percentage(count, rows);
                let row = MissingRow {
                    column: column.name.clone(),
                    missing_count: count,
                    missing_pct: round2(pct),
                };
                (row, pct)
            })
        })
        .collect();

    report.sort_by(|a, b| descending(a.1, b.1));
    report.into_iter().map(|(row, _)| row).collect()
}
