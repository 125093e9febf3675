//! Imputation and label encoding ahead of the insight detectors.
//!
//! Produces a new table; the input is never modified.

use std::collections::BTreeSet;

use tracing::debug;

use crate::stats::{quantile, sorted};
use crate::table::{Column, ColumnData, Table};

/// Text columns with fewer distinct values than this are label-encoded.
pub const ENCODE_DISTINCT_LIMIT: usize = 30;

/// Fill value for missing text cells.
pub const TEXT_FILL: &str = "Unknown";

/// Impute and encode a table.
///
/// - numeric: missing cells take the column median (all-missing columns stay missing)
/// - text: missing cells become [`TEXT_FILL`]; columns with fewer than
///   [`ENCODE_DISTINCT_LIMIT`] distinct values are then replaced by numeric codes
///   (categories sorted lexicographically, code = position)
/// - integer, categorical and datetime columns pass through unchanged
pub fn preprocess(table: &Table) -> Table {
    let columns: Vec<Column> = table.columns().iter().map(preprocess_column).collect();

    debug!(
        columns = columns.len(),
        encoded = columns
            .iter()
            .zip(table.columns())
            .filter(|(new, old)| new.column_type() != old.column_type())
            .count(),
        "preprocessed table"
    );

    // Column names and lengths are unchanged, so the table stays valid.
    Table::new(columns).unwrap_or_else(|_| table.clone())
}

fn preprocess_column(column: &Column) -> Column {
    match &column.data {
        ColumnData::Numeric(values) => {
            let median = quantile(&sorted(&column.present_numbers()), 0.5);
            let filled = values
                .iter()
                .map(|v| v.filter(|x| !x.is_nan()).or(median))
                .collect();
            Column::new(column.name.clone(), ColumnData::Numeric(filled))
        }
        ColumnData::Text(values) => {
            let filled: Vec<String> = values
                .iter()
                .map(|v| v.clone().unwrap_or_else(|| TEXT_FILL.to_string()))
                .collect();

            let categories: BTreeSet<&str> = filled.iter().map(String::as_str).collect();
            if categories.len() < ENCODE_DISTINCT_LIMIT {
                let categories: Vec<&str> = categories.into_iter().collect();
                let codes = filled
                    .iter()
                    .map(|v| {
                        categories
                            .binary_search(&v.as_str())
                            .ok()
                            .map(|code| code as f64)
                    })
                    .collect();
                Column::new(column.name.clone(), ColumnData::Numeric(codes))
            } else {
                Column::new(
                    column.name.clone(),
                    ColumnData::Text(filled.into_iter().map(Some).collect()),
                )
            }
        }
        ColumnData::Integer(_) | ColumnData::Categorical(_) | ColumnData::DateTime(_) => {
            column.clone()
        }
    }
}
