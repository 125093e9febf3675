//! Typed column storage.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::types::{CellKey, ColumnType};

/// Values of a single column. `None` marks a missing cell; for numeric
/// columns a `NaN` is treated as missing as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    /// Whole numbers with no missing cells. Stored as `f64` so numeric
    /// passes read one slice type.
    Integer(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Categorical(Vec<Option<String>>),
    DateTime(Vec<Option<NaiveDateTime>>),
}

impl ColumnData {
    /// Number of cells, missing included.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) | ColumnData::Integer(v) => v.len(),
            ColumnData::Text(v) | ColumnData::Categorical(v) => v.len(),
            ColumnData::DateTime(v) => v.len(),
        }
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage type of this column.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Numeric(_) => ColumnType::Float64,
            ColumnData::Integer(_) => ColumnType::Int64,
            ColumnData::Text(_) => ColumnType::Object,
            ColumnData::Categorical(_) => ColumnType::Category,
            ColumnData::DateTime(_) => ColumnType::Datetime64,
        }
    }

    /// Check whether the cell at `row` is missing. Out-of-range rows count
    /// as missing.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            ColumnData::Numeric(v) | ColumnData::Integer(v) => {
                v.get(row).copied().flatten().is_none_or(f64::is_nan)
            }
            ColumnData::Text(v) | ColumnData::Categorical(v) => {
                v.get(row).is_none_or(Option::is_none)
            }
            ColumnData::DateTime(v) => v.get(row).is_none_or(Option::is_none),
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_missing(row)).count()
    }

    /// Numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match self {
            ColumnData::Numeric(v) | ColumnData::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// String values, if this is a text or categorical column.
    pub fn as_strings(&self) -> Option<&[Option<String>]> {
        match self {
            ColumnData::Text(v) | ColumnData::Categorical(v) => Some(v),
            _ => None,
        }
    }

    /// Count distinct values. With `include_missing`, all missing cells
    /// together count as one extra value.
    pub fn distinct_count(&self, include_missing: bool) -> usize {
        let keys: HashSet<CellKey<'_>> = self.cell_keys().collect();
        if include_missing {
            keys.len()
        } else {
            keys.iter().filter(|k| !k.is_missing()).count()
        }
    }

    pub(crate) fn cell_keys(&self) -> Box<dyn Iterator<Item = CellKey<'_>> + '_> {
        match self {
            ColumnData::Numeric(v) | ColumnData::Integer(v) => Box::new(v.iter().map(|cell| match cell {
                Some(x) => CellKey::number(*x),
                None => CellKey::Missing,
            })),
            ColumnData::Text(v) | ColumnData::Categorical(v) => {
                Box::new(v.iter().map(|cell| match cell {
                    Some(s) => CellKey::Text(s.as_str()),
                    None => CellKey::Missing,
                }))
            }
            ColumnData::DateTime(v) => Box::new(v.iter().map(|cell| match cell {
                Some(dt) => CellKey::DateTime(*dt),
                None => CellKey::Missing,
            })),
        }
    }

    /// Render the cell at `row` for display. Missing cells render as `None`.
    pub fn display_value(&self, row: usize) -> Option<String> {
        if self.is_missing(row) {
            return None;
        }
        match self {
            ColumnData::Numeric(v) | ColumnData::Integer(v) => {
                v.get(row).copied().flatten().map(format_number)
            }
            ColumnData::Text(v) | ColumnData::Categorical(v) => v.get(row).cloned().flatten(),
            ColumnData::DateTime(v) => v
                .get(row)
                .copied()
                .flatten()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// Format a number without a trailing `.0` for whole values.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column values.
    pub data: ColumnData,
}

impl Column {
    /// Create a column from already-typed data.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Numeric column with explicit missing markers.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::new(name, ColumnData::Numeric(values.into_iter().collect()))
    }

    /// Numeric column where `NaN` marks missing values.
    pub fn from_f64s(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::numeric(
            name,
            values
                .into_iter()
                .map(|v| if v.is_nan() { None } else { Some(v) }),
        )
    }

    /// Integer column. Integers have no missing marker; use
    /// [`Column::numeric`] for whole numbers with gaps.
    pub fn integers(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(
            name,
            ColumnData::Integer(values.into_iter().map(|v| Some(v as f64)).collect()),
        )
    }

    /// Text column with explicit missing markers.
    pub fn text<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        Self::new(
            name,
            ColumnData::Text(values.into_iter().map(|v| v.map(Into::into)).collect()),
        )
    }

    /// Text column without missing values.
    pub fn strings<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::text(name, values.into_iter().map(Some))
    }

    /// Column explicitly declared categorical.
    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        Self::new(
            name,
            ColumnData::Categorical(values.into_iter().map(|v| v.map(Into::into)).collect()),
        )
    }

    /// Datetime column with explicit missing markers.
    pub fn datetime(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<NaiveDateTime>>,
    ) -> Self {
        Self::new(name, ColumnData::DateTime(values.into_iter().collect()))
    }

    /// Number of cells, missing included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Storage type of this column.
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.data.missing_count()
    }

    /// Non-missing numeric values in row order. Empty for non-numeric columns.
    pub fn present_numbers(&self) -> Vec<f64> {
        self.data
            .as_numeric()
            .map(|values| values.iter().flatten().copied().filter(|v| !v.is_nan()).collect())
            .unwrap_or_default()
    }
}
