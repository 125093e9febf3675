//! Whole-table profiling passes: type classification, missing values and
//! descriptive statistics.

mod classifier;
mod missing;
mod summary;

pub use classifier::{
    classify_column, detect_column_types, ColumnKind, ColumnTypes, CATEGORICAL_DISTINCT_LIMIT,
};
pub use missing::{flag_missing, missing_value_report, MissingRow};
pub use summary::{generate_summary, CategoricalSummary, ColumnSummary, NumericSummary};
