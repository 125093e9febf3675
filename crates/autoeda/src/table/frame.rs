//! Column-ordered in-memory table.

use std::collections::HashSet;

use serde::Serialize;

use super::column::Column;
use crate::error::{EdaError, Result};

/// An ordered set of equally long, uniquely named columns.
///
/// Analysis passes only ever borrow a table; transformations such as
/// preprocessing build a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table, checking that all columns have the same length and
    /// distinct names.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map(Column::len).unwrap_or(0);
        let mut seen = HashSet::new();

        for column in &columns {
            if column.len() != rows {
                return Err(EdaError::RaggedColumns {
                    column: column.name.clone(),
                    expected: rows,
                    found: column.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(EdaError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self { columns, rows })
    }

    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Numeric columns in table order, as `(name, values)`.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.columns
            .iter()
            .filter_map(|c| c.data.as_numeric().map(|values| (c.name.as_str(), values)))
    }

    /// Consume the table and return its columns.
    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}
