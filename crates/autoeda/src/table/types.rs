//! Physical column types and hashable cell keys.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage type of a column, decided once when the table is built.
///
/// The labels mirror the dtype names analysts are used to seeing in
/// dataframe summaries (`float64`, `object`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Floating-point numbers, or whole numbers with missing cells.
    Float64,
    /// Whole numbers without missing cells.
    Int64,
    /// Free-form text values.
    Object,
    /// Text values explicitly declared categorical.
    Category,
    /// Date and/or time values.
    Datetime64,
}

impl ColumnType {
    /// Dtype label used in summaries and reports.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Float64 => "float64",
            ColumnType::Int64 => "int64",
            ColumnType::Object => "object",
            ColumnType::Category => "category",
            ColumnType::Datetime64 => "datetime64",
        }
    }

    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float64 | ColumnType::Int64)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Datetime64)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hashable identity of a single cell, used for distinct counting.
///
/// Missing cells collapse into one slot. Numbers compare by bit pattern
/// after folding `-0.0` into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CellKey<'a> {
    Missing,
    Number(u64),
    Text(&'a str),
    DateTime(NaiveDateTime),
}

impl CellKey<'_> {
    pub(crate) fn number(value: f64) -> Self {
        if value.is_nan() {
            CellKey::Missing
        } else if value == 0.0 {
            CellKey::Number(0.0f64.to_bits())
        } else {
            CellKey::Number(value.to_bits())
        }
    }

    pub(crate) fn is_missing(&self) -> bool {
        matches!(self, CellKey::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ColumnType::Float64.to_string(), "float64");
        assert_eq!(ColumnType::Category.label(), "category");
        assert!(ColumnType::Float64.is_numeric());
        assert!(ColumnType::Int64.is_numeric());
        assert_eq!(ColumnType::Int64.label(), "int64");
        assert!(ColumnType::Datetime64.is_temporal());
        assert!(!ColumnType::Object.is_numeric());
    }

    #[test]
    fn test_signed_zero_shares_key() {
        assert_eq!(CellKey::number(0.0), CellKey::number(-0.0));
        assert!(CellKey::number(f64::NAN).is_missing());
    }
}
