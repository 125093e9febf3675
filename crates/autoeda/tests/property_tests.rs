//! Property-based tests for the AutoEDA detectors.
//!
//! These tests use proptest to generate random tables and verify that the
//! detectors and the aggregator keep their invariants on any input.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p autoeda --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p autoeda --test property_tests
//! ```

use proptest::prelude::*;

use autoeda::insights::{
    CardinalityDetector, CorrelationDetector, Detector, InsightEngine, IqrBounds,
    OutlierDetector, SkewnessDetector,
};
use autoeda::profile::{detect_column_types, flag_missing, missing_value_report};
use autoeda::{Column, InsightCategory, Table};

// =============================================================================
// Test Strategies
// =============================================================================

/// A numeric cell: mostly moderate values, some missing, occasional extremes.
fn numeric_cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        8 => (-1_000.0f64..1_000.0).prop_map(Some),
        1 => Just(None),
        1 => (-1e6f64..1e6).prop_map(Some),
    ]
}

/// A text cell drawn from a small alphabet so duplicates are common.
fn text_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        6 => "[a-e]{1,2}".prop_map(Some),
        1 => Just(None),
    ]
}

/// A table of 0-40 rows with 1-4 numeric columns and 0-2 text columns.
fn table() -> impl Strategy<Value = Table> {
    (0usize..40, 1usize..5, 0usize..3).prop_flat_map(|(rows, numeric, text)| {
        (
            prop::collection::vec(prop::collection::vec(numeric_cell(), rows), numeric),
            prop::collection::vec(prop::collection::vec(text_cell(), rows), text),
        )
            .prop_map(|(numeric, text)| {
                let mut columns: Vec<Column> = numeric
                    .into_iter()
                    .enumerate()
                    .map(|(i, values)| Column::numeric(format!("n{i}"), values))
                    .collect();
                columns.extend(
                    text.into_iter()
                        .enumerate()
                        .map(|(i, values)| Column::text(format!("t{i}"), values)),
                );
                Table::new(columns).unwrap()
            })
    })
}

// =============================================================================
// Aggregator
// =============================================================================

proptest! {
    #[test]
    fn report_counts_match_flagged_rows(t in table()) {
        let run = InsightEngine::new().run(&t);

        prop_assert_eq!(
            run.report.get(InsightCategory::Outliers).len(),
            run.outliers.rows.iter().filter(|r| r.flagged).count()
        );
        prop_assert_eq!(
            run.report.get(InsightCategory::Skewness).len(),
            run.skewness.iter().filter(|r| r.flagged).count()
        );
        prop_assert_eq!(
            run.report.get(InsightCategory::Cardinality).len(),
            run.cardinality.iter().filter(|r| r.flagged).count()
        );
        prop_assert_eq!(
            run.report.get(InsightCategory::Correlation).len(),
            run.correlations.len()
        );
    }

    #[test]
    fn messages_stay_in_their_category(t in table()) {
        let report = InsightEngine::new().report(&t);

        for message in report.get(InsightCategory::Outliers) {
            prop_assert!(message.contains("outliers detected by"));
        }
        for message in report.get(InsightCategory::Skewness) {
            prop_assert!(message.contains("-skewed"));
        }
        for message in report.get(InsightCategory::Cardinality) {
            prop_assert!(message.contains("unique values"));
        }
        for message in report.get(InsightCategory::Correlation) {
            prop_assert!(message.starts_with("Columns '"));
        }
    }

    #[test]
    fn engine_is_deterministic(t in table()) {
        let engine = InsightEngine::new();
        prop_assert_eq!(engine.run(&t), engine.run(&t));
    }
}

// =============================================================================
// Detectors
// =============================================================================

proptest! {
    #[test]
    fn outlier_pct_in_range(t in table()) {
        let summary = OutlierDetector::new().summary(&t);
        for row in &summary.rows {
            prop_assert!((0.0..=100.0).contains(&row.outlier_pct));
        }
        for pair in summary.rows.windows(2) {
            prop_assert!(pair[0].outlier_pct >= pair[1].outlier_pct);
        }
    }

    #[test]
    fn iqr_bounds_are_ordered(
        values in prop::collection::vec(-1e6f64..1e6, 1..60),
        multiplier in 0.0f64..5.0,
    ) {
        let bounds = IqrBounds::from_values(&values, multiplier).unwrap();
        prop_assert!(bounds.lower <= bounds.q1);
        prop_assert!(bounds.q1 <= bounds.q3);
        prop_assert!(bounds.q3 <= bounds.upper);
    }

    #[test]
    fn correlation_pairs_follow_column_order(t in table()) {
        let names = t.column_names();
        let pairs = CorrelationDetector::new().detect_correlations(&t);

        for pair in &pairs {
            let a = names.iter().position(|n| *n == pair.column_a).unwrap();
            let b = names.iter().position(|n| *n == pair.column_b).unwrap();
            prop_assert!(a < b);
            prop_assert!(pair.correlation <= 1.0);
        }
        for (i, p) in pairs.iter().enumerate() {
            for q in &pairs[i + 1..] {
                prop_assert!(!(p.column_a == q.column_b && p.column_b == q.column_a));
                prop_assert!(!(p.column_a == q.column_a && p.column_b == q.column_b));
            }
        }
    }

    #[test]
    fn all_unique_column_is_fully_unique(rows in 1usize..200) {
        let t = Table::new(vec![Column::from_f64s("id", (0..rows).map(|i| i as f64))]).unwrap();
        let rows = CardinalityDetector::new().detect_cardinality(&t);
        prop_assert_eq!(rows[0].uniqueness_pct, 100.0);
    }

    #[test]
    fn symmetric_column_has_zero_skew(
        half in prop::collection::vec(0.0f64..1_000.0, 2..30),
        center in -100.0f64..100.0,
    ) {
        let mut values: Vec<f64> = half.iter().map(|v| center + v).collect();
        values.extend(half.iter().map(|v| center - v));

        let t = Table::new(vec![Column::from_f64s("sym", values)]).unwrap();
        let detection = SkewnessDetector::new().detect(&t).unwrap();

        prop_assert_eq!(detection.rows.len(), 1);
        prop_assert_eq!(format!("{:.2}", detection.rows[0].skewness.abs()), "0.00");
        prop_assert!(detection.insights.is_empty());
    }

    #[test]
    fn skewness_sorted_by_magnitude(t in table()) {
        let rows = SkewnessDetector::new().detect_skewness(&t);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].skewness.abs() >= pair[1].skewness.abs());
        }
    }
}

// =============================================================================
// Profiling
// =============================================================================

proptest! {
    #[test]
    fn every_column_classified_once(t in table()) {
        let types = detect_column_types(&t);
        prop_assert_eq!(types.len(), t.column_count());
        for name in t.column_names() {
            prop_assert!(types.kind_of(name).is_some());
        }
    }

    #[test]
    fn missing_flags_subset_of_report(t in table(), threshold in 0.0f64..1.0) {
        let report = missing_value_report(&t);
        let flags = flag_missing(&t, threshold);

        for flag in &flags {
            prop_assert!(report.iter().any(|r| r.column == flag.column));
        }
        for pair in report.windows(2) {
            prop_assert!(pair[0].missing_pct >= pair[1].missing_pct);
        }
    }
}
