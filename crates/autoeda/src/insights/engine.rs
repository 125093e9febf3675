//! Runs every detector over a table and aggregates their messages.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::cardinality::{CardinalityDetector, CardinalityRow};
use super::correlation::{CorrelationDetector, CorrelationPair};
use super::detector::{Detection, Detector, InsightCategory};
use super::outlier::{OutlierDetector, OutlierSummary};
use super::skewness::{SkewnessDetector, SkewnessRow};
use crate::config::EdaConfig;
use crate::table::Table;

/// Insight messages keyed by category.
///
/// All four categories are always present, in report order, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InsightReport {
    sections: IndexMap<InsightCategory, Vec<String>>,
}

impl InsightReport {
    /// A report with every category empty.
    pub fn new() -> Self {
        Self {
            sections: InsightCategory::ALL
                .iter()
                .map(|&category| (category, Vec::new()))
                .collect(),
        }
    }

    /// Messages for one category.
    pub fn get(&self, category: InsightCategory) -> &[String] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories and their messages in report order.
    pub fn iter(&self) -> impl Iterator<Item = (InsightCategory, &[String])> {
        self.sections
            .iter()
            .map(|(category, messages)| (*category, messages.as_slice()))
    }

    /// Total number of messages.
    pub fn total(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Returns true if no detector produced a message.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn set(&mut self, category: InsightCategory, messages: Vec<String>) {
        self.sections.insert(category, messages);
    }
}

impl Default for InsightReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw detector tables plus the aggregated report from one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InsightRun {
    pub outliers: OutlierSummary,
    pub skewness: Vec<SkewnessRow>,
    pub cardinality: Vec<CardinalityRow>,
    pub correlations: Vec<CorrelationPair>,
    pub report: InsightReport,
}

/// Holds one configured instance of each detector.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    outliers: OutlierDetector,
    skewness: SkewnessDetector,
    cardinality: CardinalityDetector,
    correlation: CorrelationDetector,
}

impl InsightEngine {
    /// Create an engine with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from analysis configuration.
    pub fn from_config(config: &EdaConfig) -> Self {
        Self {
            outliers: OutlierDetector::with_config(config.outliers.clone()),
            skewness: SkewnessDetector::with_config(config.skewness.clone()),
            cardinality: CardinalityDetector::with_config(config.cardinality.clone()),
            correlation: CorrelationDetector::with_config(config.correlation.clone()),
        }
    }

    /// Run all detectors.
    ///
    /// A detector that fails leaves its category empty; the others still run.
    pub fn run(&self, table: &Table) -> InsightRun {
        let mut report = InsightReport::new();

        let outliers = isolate(&self.outliers, table, &mut report);
        let skewness = isolate(&self.skewness, table, &mut report);
        let cardinality = isolate(&self.cardinality, table, &mut report);
        let correlations = isolate(&self.correlation, table, &mut report);

        debug!(insights = report.total(), "insight run complete");

        InsightRun {
            outliers: OutlierSummary { rows: outliers },
            skewness,
            cardinality,
            correlations,
            report,
        }
    }

    /// Run all detectors and keep only the messages.
    pub fn report(&self, table: &Table) -> InsightReport {
        self.run(table).report
    }
}

/// Generate insights with default thresholds.
pub fn generate_all_insights(table: &Table) -> InsightReport {
    InsightEngine::new().report(table)
}

fn isolate<D: Detector>(detector: &D, table: &Table, report: &mut InsightReport) -> Vec<D::Row> {
    let category = detector.category();
    let Detection { rows, insights } = match detector.detect(table) {
        Ok(detection) => detection,
        Err(e) => {
            warn!(%category, error = %e, "detector failed, skipping");
            Detection::default()
        }
    };

    debug!(%category, rows = rows.len(), insights = insights.len(), "detector finished");
    report.set(category, insights);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorrelationConfig, OutlierConfig};
    use crate::table::Column;

    fn sample() -> Table {
        let mut skewed: Vec<f64> = (1..=14).map(f64::from).collect();
        skewed.push(1000.0);
        Table::new(vec![
            Column::from_f64s("income", skewed.clone()),
            Column::from_f64s("income_x2", skewed.iter().map(|v| v * 2.0)),
            Column::strings("id", (0..15).map(|i| format!("id{i}"))),
        ])
        .unwrap()
    }

    #[test]
    fn test_report_has_all_categories_in_order() {
        // Repeated values keep uniqueness at 50% and skew at 0.
        let table = Table::new(vec![Column::from_f64s("x", [1.0, 1.0, 2.0, 2.0])]).unwrap();
        let report = generate_all_insights(&table);

        let categories: Vec<InsightCategory> = report.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, InsightCategory::ALL.to_vec());
        assert!(report.is_empty());
    }

    #[test]
    fn test_all_detectors_contribute() {
        let run = InsightEngine::new().run(&sample());

        assert_eq!(run.report.get(InsightCategory::Outliers).len(), 4);
        assert_eq!(run.report.get(InsightCategory::Skewness).len(), 2);
        assert_eq!(run.report.get(InsightCategory::Cardinality).len(), 3);
        assert_eq!(run.report.get(InsightCategory::Correlation).len(), 1);
        assert_eq!(run.report.total(), 10);
        assert_eq!(run.correlations.len(), 1);
    }

    #[test]
    fn test_failing_detector_is_isolated() {
        let config = EdaConfig {
            outliers: OutlierConfig {
                z_threshold: f64::NAN,
                ..OutlierConfig::default()
            },
            ..EdaConfig::default()
        };
        let run = InsightEngine::from_config(&config).run(&sample());

        assert!(run.report.get(InsightCategory::Outliers).is_empty());
        assert!(run.outliers.rows.is_empty());
        assert!(!run.report.get(InsightCategory::Skewness).is_empty());
    }

    #[test]
    fn test_config_thresholds_applied() {
        let config = EdaConfig {
            correlation: CorrelationConfig { threshold: 1.0 },
            ..EdaConfig::default()
        };
        let run = InsightEngine::from_config(&config).run(&sample());
        assert!(run.report.get(InsightCategory::Correlation).is_empty());
    }

    #[test]
    fn test_report_serializes_as_map() {
        let json = serde_json::to_string(&generate_all_insights(&sample())).unwrap();
        let positions: Vec<usize> = ["\"Outliers\"", "\"Skewness\"", "\"Cardinality\"", "\"Correlation\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
