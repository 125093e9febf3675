//! Pairwise Pearson correlation between numeric columns.

use serde::{Deserialize, Serialize};

use super::detector::{Detector, InsightCategory};
use crate::config::CorrelationConfig;
use crate::error::Result;
use crate::stats::{descending, pearson};
use crate::table::Table;

/// Absolute correlation matrix over the numeric columns of a table.
///
/// Cells are `None` where the coefficient is undefined (constant column or
/// fewer than two complete pairs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Compute `|pearson|` for every pair of numeric columns.
    pub fn compute(table: &Table) -> Self {
        let numeric: Vec<(&str, &[Option<f64>])> = table.numeric_columns().collect();
        let n = numeric.len();
        let mut values = vec![vec![None; n]; n];

        for i in 0..n {
            for j in i..n {
                let r = pearson(numeric[i].1, numeric[j].1).map(f64::abs);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            columns: numeric.iter().map(|(name, _)| name.to_string()).collect(),
            values,
        }
    }

    /// Coefficient for a pair of columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    /// Upper-triangle pairs strictly above `threshold`, strongest first.
    pub fn pairs_above(&self, threshold: f64) -> Vec<CorrelationPair> {
        let mut pairs = Vec::new();
        for (i, row) in self.values.iter().enumerate() {
            for (j, value) in row.iter().enumerate().skip(i + 1) {
                if let Some(r) = value.filter(|r| *r > threshold) {
                    pairs.push(CorrelationPair {
                        column_a: self.columns[i].clone(),
                        column_b: self.columns[j].clone(),
                        correlation: r,
                    });
                }
            }
        }
        pairs.sort_by(|a, b| descending(a.correlation, b.correlation));
        pairs
    }
}

/// A strongly correlated pair of columns, in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub column_a: String,
    pub column_b: String,
    /// Absolute Pearson coefficient.
    pub correlation: f64,
}

impl CorrelationPair {
    pub fn message(&self) -> String {
        format!(
            "Columns '{}' and '{}' have high correlation ({:.2}); consider dropping one or combining them.",
            self.column_a, self.column_b, self.correlation
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorrelationDetector {
    config: CorrelationConfig,
}

impl CorrelationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Column pairs above the configured threshold.
    pub fn detect_correlations(&self, table: &Table) -> Vec<CorrelationPair> {
        CorrelationMatrix::compute(table).pairs_above(self.config.threshold)
    }
}

impl Detector for CorrelationDetector {
    type Row = CorrelationPair;

    fn category(&self) -> InsightCategory {
        InsightCategory::Correlation
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn rows(&self, table: &Table) -> Vec<CorrelationPair> {
        self.detect_correlations(table)
    }

    fn messages(&self, rows: &[CorrelationPair]) -> Vec<String> {
        rows.iter().map(CorrelationPair::message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn sample() -> Table {
        Table::new(vec![
            Column::from_f64s("a", [1.0, 2.0, 3.0, 4.0, 5.0]),
            Column::from_f64s("b", [2.0, 4.0, 6.0, 8.0, 10.0]),
            Column::from_f64s("c", [5.0, 3.0, 4.0, 1.0, 2.0]),
            Column::strings("name", ["v", "w", "x", "y", "z"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_perfect_pair_reported_once() {
        let detection = CorrelationDetector::new().detect(&sample()).unwrap();

        assert_eq!(detection.rows.len(), 1);
        let pair = &detection.rows[0];
        assert_eq!((pair.column_a.as_str(), pair.column_b.as_str()), ("a", "b"));
        assert!((pair.correlation - 1.0).abs() < 1e-12);
        assert_eq!(
            detection.insights,
            vec![
                "Columns 'a' and 'b' have high correlation (1.00); consider dropping one or combining them."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_negative_correlation_uses_magnitude() {
        let table = Table::new(vec![
            Column::from_f64s("up", [1.0, 2.0, 3.0, 4.0]),
            Column::from_f64s("down", [8.0, 6.0, 4.0, 2.0]),
        ])
        .unwrap();
        let pairs = CorrelationDetector::new().detect_correlations(&table);
        assert_eq!(pairs.len(), 1);
        assert!((pairs[0].correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = CorrelationMatrix::compute(&sample());
        assert_eq!(matrix.columns, vec!["a", "b", "c"]);
        assert_eq!(matrix.get("a", "c"), matrix.get("c", "a"));
        assert!(matrix.get("a", "name").is_none());
    }

    #[test]
    fn test_constant_column_excluded() {
        let table = Table::new(vec![
            Column::from_f64s("a", [1.0, 2.0, 3.0]),
            Column::from_f64s("k", [4.0, 4.0, 4.0]),
        ])
        .unwrap();
        assert!(CorrelationMatrix::compute(&table).get("a", "k").is_none());
        assert!(CorrelationDetector::new().detect_correlations(&table).is_empty());
    }

    #[test]
    fn test_pairwise_complete_rows() {
        let table = Table::new(vec![
            Column::numeric("x", vec![Some(1.0), Some(2.0), None, Some(4.0)]),
            Column::numeric("y", vec![Some(10.0), Some(20.0), Some(99.0), Some(40.0)]),
        ])
        .unwrap();
        let pairs = CorrelationDetector::new().detect_correlations(&table);
        assert_eq!(pairs.len(), 1);
        assert!((pairs[0].correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_correlations_keep_upper_triangle_order() {
        let line = [1.0, 2.0, 3.0, 4.0, 5.0];
        let table = Table::new(vec![
            Column::from_f64s("w", [1.0, 2.0, 3.0, 5.0, 4.0]),
            Column::from_f64s("a", line),
            Column::from_f64s("b", line),
            Column::from_f64s("c", line),
        ])
        .unwrap();

        let pairs = CorrelationDetector::new().detect_correlations(&table);
        let names: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.column_a.as_str(), p.column_b.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![("a", "b"), ("a", "c"), ("b", "c"), ("w", "a"), ("w", "b"), ("w", "c")]
        );
        assert!((pairs[3].correlation - 0.9).abs() < 1e-12);
    }
}
