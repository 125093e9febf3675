//! Column type classification.

use serde::{Deserialize, Serialize};

use crate::table::{Column, ColumnData, Table};

/// Text columns with fewer distinct values than this (missing counted as one
/// value) are classified categorical.
///
/// Kept separate from [`crate::preprocess::ENCODE_DISTINCT_LIMIT`]: the two
/// cut-offs serve different purposes.
pub const CATEGORICAL_DISTINCT_LIMIT: usize = 20;

/// Analytical kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numerical,
    Categorical,
    Datetime,
    Other,
}

impl ColumnKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numerical => "numerical",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Other => "other",
        }
    }
}

/// Partition of a table's columns by kind. Each bucket keeps table order and
/// every column appears in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypes {
    pub numerical: Vec<String>,
    pub categorical: Vec<String>,
    pub datetime: Vec<String>,
    pub other: Vec<String>,
}

impl ColumnTypes {
    /// Kind assigned to a column, if the column was classified.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.buckets()
            .into_iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(kind, _)| kind)
    }

    /// Total number of classified columns.
    pub fn len(&self) -> usize {
        self.buckets().iter().map(|(_, names)| names.len()).sum()
    }

    /// Returns true if no columns were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in a fixed order: numerical, categorical, datetime, other.
    pub fn buckets(&self) -> [(ColumnKind, &[String]); 4] {
        [
            (ColumnKind::Numerical, self.numerical.as_slice()),
            (ColumnKind::Categorical, self.categorical.as_slice()),
            (ColumnKind::Datetime, self.datetime.as_slice()),
            (ColumnKind::Other, self.other.as_slice()),
        ]
    }

    fn push(&mut self, kind: ColumnKind, name: String) {
        match kind {
            ColumnKind::Numerical => self.numerical.push(name),
            ColumnKind::Categorical => self.categorical.push(name),
            ColumnKind::Datetime => self.datetime.push(name),
            ColumnKind::Other => self.other.push(name),
        }
    }
}

/// Classify one column.
///
/// Precedence: numeric storage wins even with very few distinct values, then
/// datetime storage, then declared-categorical or low distinct count.
pub fn classify_column(column: &Column) -> ColumnKind {
    match &column.data {
        ColumnData::Numeric(_) | ColumnData::Integer(_) => ColumnKind::Numerical,
        ColumnData::DateTime(_) => ColumnKind::Datetime,
        ColumnData::Categorical(_) => ColumnKind::Categorical,
        ColumnData::Text(_) => {
            if column.data.distinct_count(true) < CATEGORICAL_DISTINCT_LIMIT {
                ColumnKind::Categorical
            } else {
                ColumnKind::Other
            }
        }
    }
}

/// Classify every column of a table.
pub fn detect_column_types(table: &Table) -> ColumnTypes {
    let mut types = ColumnTypes::default();
    for column in table.columns() {
        types.push(classify_column(column), column.name.clone());
    }
    types
}
