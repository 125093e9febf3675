//! Resolve raw string cells into typed columns.
//!
//! Each column is typed exactly once, here. Downstream passes dispatch on
//! [`ColumnData`] instead of re-inspecting strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::source::RawTable;
use crate::table::{Column, ColumnData};

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Cheap shape checks run before the chrono parsers.

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{4}-\d{2}-\d{2}", // ISO date
        r"^\d{2}/\d{2}/\d{4}", // US date
        r"^\d{2}-\d{2}-\d{4}", // European date
        r"^\d{4}/\d{2}/\d{2}", // Alt ISO
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Parse a finite number.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer literal such as `42` or `-7` (not `4.0`).
fn is_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

/// Parse a date or datetime in one of the supported layouts.
pub(crate) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if !DATE_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Type a raw column: numeric if every present cell is a number, datetime if
/// every present cell is a date, text otherwise. All-missing columns are text.
///
/// A numeric column with only integer literals and no missing cells is stored
/// as [`ColumnData::Integer`]; a single gap makes it floating point.
pub(crate) fn resolve_column<'a>(
    name: &str,
    values: impl Iterator<Item = &'a str> + Clone,
) -> Column {
    let present = || values.clone().filter(|v| !RawTable::is_null_value(v));

    let any_present = present().next().is_some();
    if any_present && present().all(|v| parse_number(v).is_some()) {
        let data = values
            .clone()
            .map(|v| if RawTable::is_null_value(v) { None } else { parse_number(v) })
            .collect();
        let whole = values
            .clone()
            .all(|v| !RawTable::is_null_value(v) && is_integer(v));
        return if whole {
            Column::new(name, ColumnData::Integer(data))
        } else {
            Column::new(name, ColumnData::Numeric(data))
        };
    }

    if any_present && present().all(|v| parse_datetime(v).is_some()) {
        let data = values
            .clone()
            .map(|v| if RawTable::is_null_value(v) { None } else { parse_datetime(v) })
            .collect();
        return Column::new(name, ColumnData::DateTime(data));
    }

    let data = values
        .map(|v| {
            if RawTable::is_null_value(v) {
                None
            } else {
                Some(v.trim().to_string())
            }
        })
        .collect();
    Column::new(name, ColumnData::Text(data))
}
