//! Main Explorer struct and public API.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::EdaConfig;
use crate::error::Result;
use crate::input::{Parser, SourceMetadata};
use crate::insights::{
    CardinalityRow, CorrelationPair, InsightEngine, InsightReport, OutlierSummary, SkewnessRow,
};
use crate::preprocess::preprocess;
use crate::profile::{
    detect_column_types, flag_missing, generate_summary, missing_value_report, ColumnSummary,
    ColumnTypes, MissingRow,
};
use crate::table::Table;

/// Result of analyzing a table.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Metadata about the source file, when the table was loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Columns grouped by analytical kind.
    pub column_types: ColumnTypes,
    /// Per-column descriptive statistics.
    pub summary: Vec<ColumnSummary>,
    /// Columns with any missing values.
    pub missing: Vec<MissingRow>,
    /// Columns above the missing-fraction threshold.
    pub missing_flags: Vec<MissingRow>,
    pub outliers: OutlierSummary,
    pub skewness: Vec<SkewnessRow>,
    pub cardinality: Vec<CardinalityRow>,
    pub correlations: Vec<CorrelationPair>,
    /// Insight messages by category.
    pub insights: InsightReport,
}

impl AnalysisResult {
    /// Whether anything was flagged: missing columns or insight messages.
    pub fn has_findings(&self) -> bool {
        !self.missing_flags.is_empty() || !self.insights.is_empty()
    }
}

/// The main analysis session.
///
/// Profiling (classification, missing values, summary) always runs on the
/// table as given. The insight detectors run on the preprocessed table unless
/// preprocessing is disabled.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    config: EdaConfig,
    parser: Parser,
    engine: InsightEngine,
}

impl Explorer {
    /// Create an Explorer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an Explorer with custom configuration.
    pub fn with_config(config: EdaConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let engine = InsightEngine::from_config(&config);
        Self {
            config,
            parser,
            engine,
        }
    }

    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Load a delimited file and analyze it.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;

        info!(
            file = %source.file,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );

        let mut result = self.analyze_table(&table);
        result.source = Some(source);
        Ok(result)
    }

    /// Analyze an in-memory table. Never fails; degenerate tables yield empty sections.
    pub fn analyze_table(&self, table: &Table) -> AnalysisResult {
        let missing_flags = match self.config.missing.validate() {
            Ok(()) => flag_missing(table, self.config.missing.threshold),
            Err(e) => {
                warn!(error = %e, "missing-value flags skipped");
                Vec::new()
            }
        };

        let run = if self.config.preprocess {
            self.engine.run(&preprocess(table))
        } else {
            self.engine.run(table)
        };

        AnalysisResult {
            source: None,
            rows: table.row_count(),
            columns: table.column_count(),
            column_types: detect_column_types(table),
            summary: generate_summary(table),
            missing: missing_value_report(table),
            missing_flags,
            outliers: run.outliers,
            skewness: run.skewness,
            cardinality: run.cardinality,
            correlations: run.correlations,
            insights: run.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissingConfig;
    use crate::insights::InsightCategory;
    use crate::table::Column;

    fn sample() -> Table {
        Table::new(vec![
            Column::numeric(
                "score",
                vec![Some(1.0), Some(2.0), None, Some(4.0), Some(100.0)],
            ),
            Column::text("grade", vec![Some("a"), None, Some("b"), Some("a"), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_analyze_table_sections() {
        let result = Explorer::new().analyze_table(&sample());

        assert_eq!(result.rows, 5);
        assert_eq!(result.columns, 2);
        assert!(result.source.is_none());
        assert_eq!(result.column_types.numerical, vec!["score"]);
        assert_eq!(result.column_types.categorical, vec!["grade"]);
        assert_eq!(result.summary.len(), 2);
        assert_eq!(result.missing.len(), 2);
        assert_eq!(result.missing_flags.len(), 1);
        assert_eq!(result.missing_flags[0].column, "grade");
        assert!(result.has_findings());
    }

    #[test]
    fn test_detectors_see_preprocessed_table() {
        // "grade" is label-encoded, so it appears in the outlier tables.
        let result = Explorer::new().analyze_table(&sample());
        assert!(result.outliers.rows.iter().any(|r| r.column == "grade"));

        let raw = Explorer::with_config(EdaConfig {
            preprocess: false,
            ..EdaConfig::default()
        })
        .analyze_table(&sample());
        assert!(raw.outliers.rows.iter().all(|r| r.column == "score"));
    }

    #[test]
    fn test_profiling_sees_raw_table() {
        let result = Explorer::new().analyze_table(&sample());
        let score = &result.summary[0];
        assert_eq!(score.count, 4);
    }

    #[test]
    fn test_invalid_missing_threshold_isolated() {
        let explorer = Explorer::with_config(EdaConfig {
            missing: MissingConfig { threshold: 2.0 },
            ..EdaConfig::default()
        });
        let result = explorer.analyze_table(&sample());
        assert!(result.missing_flags.is_empty());
        assert_eq!(result.missing.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let result = Explorer::new().analyze_table(&Table::empty());
        assert_eq!(result.rows, 0);
        assert!(result.summary.is_empty());
        assert!(result.insights.get(InsightCategory::Outliers).is_empty());
        assert!(!result.has_findings());
    }
}
