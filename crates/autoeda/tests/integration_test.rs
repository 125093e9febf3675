//! Integration tests for AutoEDA.

use std::io::Write;
use tempfile::NamedTempFile;

use autoeda::insights::{CardinalityDetector, CorrelationDetector, Detector, OutlierDetector};
use autoeda::profile::ColumnKind;
use autoeda::report::{insights_to_csv, to_html, to_json};
use autoeda::{
    generate_all_insights, Column, ColumnType, EdaConfig, Explorer, InsightCategory, Table,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_analyze_basic_csv() {
    let content = "id,name,age,joined\n\
                   1,Alice,30,2023-01-05\n\
                   2,Bob,25,2023-02-11\n\
                   3,Carol,,2023-03-20\n";
    let file = create_test_file(content);

    let result = Explorer::new()
        .analyze_path(file.path())
        .expect("Analysis failed");

    let source = result.source.as_ref().expect("source metadata");
    assert_eq!(source.row_count, 3);
    assert_eq!(source.column_count, 4);
    assert_eq!(source.format, "csv");
    assert_eq!(result.rows, 3);
    assert_eq!(result.columns, 4);

    assert_eq!(result.column_types.numerical, vec!["id", "age"]);
    assert_eq!(result.column_types.categorical, vec!["name"]);
    assert_eq!(result.column_types.datetime, vec!["joined"]);
    assert_eq!(result.summary[3].dtype, ColumnType::Datetime64);
    // Whole numbers keep an integer dtype unless a cell is missing.
    assert_eq!(result.summary[0].dtype, ColumnType::Int64);
    assert_eq!(result.summary[2].dtype, ColumnType::Float64);
}

#[test]
fn test_analyze_tsv_auto_detect() {
    let content = "sample\tvalue\n\
                   s1\t1.5\n\
                   s2\t2.5\n\
                   s3\tNA\n";
    let file = create_test_file(content);

    let result = Explorer::new()
        .analyze_path(file.path())
        .expect("Analysis failed");

    assert_eq!(result.source.as_ref().unwrap().format, "tsv");
    assert_eq!(result.missing.len(), 1);
    assert_eq!(result.missing[0].column, "value");
    assert_eq!(result.missing[0].missing_pct, 33.33);
}

#[test]
fn test_analyze_xlsx_first_sheet() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/orders.xlsx");

    let result = Explorer::new().analyze_path(&path).expect("Analysis failed");

    let source = result.source.as_ref().expect("source metadata");
    assert_eq!(source.format, "xlsx");
    assert_eq!(source.file, "orders.xlsx");
    assert_eq!(result.rows, 4);
    assert_eq!(result.columns, 4);

    assert_eq!(result.column_types.numerical, vec!["units", "price"]);
    assert_eq!(result.column_types.categorical, vec!["region"]);
    assert_eq!(result.column_types.datetime, vec!["ordered"]);

    assert_eq!(result.summary[1].dtype, ColumnType::Int64);
    assert_eq!(result.summary[2].dtype, ColumnType::Float64);
    assert_eq!(result.missing.len(), 1);
    assert_eq!(result.missing[0].column, "price");
    assert_eq!(result.missing[0].missing_pct, 25.0);
}

#[test]
fn test_missing_file_is_error() {
    let err = Explorer::new()
        .analyze_path("/definitely/not/here.csv")
        .unwrap_err();
    assert!(err.to_string().contains("here.csv"));
}

#[test]
fn test_header_only_file() {
    let file = create_test_file("a,b,c\n");
    let result = Explorer::new()
        .analyze_path(file.path())
        .expect("Analysis failed");

    assert_eq!(result.rows, 0);
    assert_eq!(result.columns, 3);
    assert!(result.insights.is_empty());
    assert!(result.outliers.rows.is_empty());
}

// =============================================================================
// Detector scenarios
// =============================================================================

#[test]
fn test_scenario_iqr_outlier() {
    let table = Table::new(vec![Column::from_f64s("age", [1.0, 2.0, 3.0, 4.0, 100.0])]).unwrap();
    let rows = OutlierDetector::new().detect_iqr(&table);

    assert_eq!(rows[0].column, "age");
    assert_eq!(rows[0].outlier_count, 1);
    assert_eq!(rows[0].outlier_pct, 20.0);
}

#[test]
fn test_scenario_perfect_correlation() {
    let table = Table::new(vec![
        Column::from_f64s("x", [1.0, 2.0, 3.0, 4.0, 5.0]),
        Column::from_f64s("y", [2.0, 4.0, 6.0, 8.0, 10.0]),
    ])
    .unwrap();
    let detection = CorrelationDetector::new().detect(&table).unwrap();

    assert_eq!(detection.rows.len(), 1);
    assert_eq!(detection.rows[0].column_a, "x");
    assert_eq!(detection.rows[0].column_b, "y");
    assert_eq!(format!("{:.2}", detection.rows[0].correlation), "1.00");
    assert_eq!(detection.insights.len(), 1);
}

#[test]
fn test_scenario_identifier_cardinality() {
    let table = Table::new(vec![Column::strings("id", ["a", "b", "c", "d", "e"])]).unwrap();
    let detector = CardinalityDetector::new();

    let rows = detector.detect_cardinality(&table);
    assert_eq!(rows[0].uniqueness_pct, 100.0);
    assert_eq!(detector.high_cardinality(&table).len(), 1);
    assert_eq!(
        generate_all_insights(&table).get(InsightCategory::Cardinality),
        ["Column 'id' has 100.00% unique values — may behave like an identifier."]
    );
}

#[test]
fn test_scenario_missing_flags() {
    let content = "score,bonus,name\n\
                   1,1,a\n,2,b\n3,,c\n,4,d\n5,5,e\n\
                   6,,f\n,7,g\n8,8,h\n,9,i\n10,10,j\n";
    let file = create_test_file(content);

    let result = Explorer::new().analyze_path(file.path()).unwrap();
    assert_eq!(result.missing_flags.len(), 1);
    assert_eq!(result.missing_flags[0].column, "score");
    assert_eq!(result.missing_flags[0].missing_pct, 40.0);

    let names: Vec<&str> = result.missing.iter().map(|r| r.column.as_str()).collect();
    assert_eq!(names, vec!["score", "bonus"]);
}

#[test]
fn test_scenario_empty_table() {
    let table = Table::new(vec![
        Column::from_f64s("a", []),
        Column::strings::<&str>("b", []),
    ])
    .unwrap();

    let report = generate_all_insights(&table);
    for category in InsightCategory::ALL {
        assert!(report.get(category).is_empty());
    }
    assert!(Table::empty().is_empty());
    assert!(generate_all_insights(&Table::empty()).is_empty());
}

// =============================================================================
// Configuration and preprocessing
// =============================================================================

#[test]
fn test_config_file_overrides_thresholds() {
    let config_file = create_test_file(r#"{ "correlation": { "threshold": 0.5 }, "preprocess": false }"#);
    let config = EdaConfig::from_json_file(config_file.path()).unwrap();
    assert_eq!(config.correlation.threshold, 0.5);
    assert!(!config.preprocess);
    assert_eq!(config.skewness.threshold, 1.0);

    let data = create_test_file("a,b\n1,2\n2,1\n3,4\n4,3\n5,6\n");
    let result = Explorer::with_config(config).analyze_path(data.path()).unwrap();
    assert_eq!(result.correlations.len(), 1);
}

#[test]
fn test_low_cardinality_text_encoded_for_detectors() {
    let content = "grade,points\n\
                   a,10\nb,20\na,11\nc,30\nb,21\n";
    let file = create_test_file(content);

    let result = Explorer::new().analyze_path(file.path()).unwrap();

    // Profiling keeps the text column as loaded.
    assert_eq!(result.column_types.kind_of("grade"), Some(ColumnKind::Categorical));
    assert!(result.summary[0].categorical.is_some());
    // Detectors see the encoded codes, which track points closely.
    assert!(result
        .correlations
        .iter()
        .any(|p| p.column_a == "grade" && p.column_b == "points"));
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_reports_render() {
    let content = "user,spend\n\
                   u1,10\nu2,12\nu3,11\nu4,13\nu5,400\n";
    let file = create_test_file(content);
    let result = Explorer::new().analyze_path(file.path()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
    assert_eq!(json["source"]["row_count"], 5);
    assert_eq!(json["column_types"]["categorical"][0], "user");

    let csv = insights_to_csv(&result.insights).unwrap();
    assert!(csv.contains("Outliers,Column 'spend' has 20.00% outliers detected by IQR."));

    let html = to_html(&result);
    assert!(html.contains("<h3>Cardinality</h3>"));
    assert!(html.contains(&result.source.as_ref().unwrap().hash));
}
