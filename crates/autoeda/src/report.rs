//! Rendering an analysis as JSON, CSV or a standalone HTML page.

use std::fmt::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

use crate::error::{EdaError, Result};
use crate::explorer::AnalysisResult;
use crate::insights::InsightReport;
use crate::profile::{ColumnSummary, MissingRow};
use crate::table::format_number;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Json,
    Html,
    /// The summary table only.
    Csv,
}

impl ReportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
            ReportFormat::Csv => "csv",
        }
    }

    /// Render an analysis in this format.
    pub fn render(&self, result: &AnalysisResult) -> Result<String> {
        match self {
            ReportFormat::Json => to_json(result),
            ReportFormat::Html => Ok(to_html(result)),
            ReportFormat::Csv => summary_to_csv(&result.summary),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!("Unknown format: {s}. Use json, html, or csv.")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render and write a report to `path`.
pub fn write_report(result: &AnalysisResult, format: ReportFormat, path: &Path) -> Result<()> {
    let rendered = format.render(result)?;
    std::fs::write(path, rendered).map_err(|e| EdaError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pretty-printed JSON of the whole analysis.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

const SUMMARY_HEADERS: [&str; 14] = [
    "column",
    "dtype",
    "count",
    "missing_pct",
    "mean",
    "std",
    "min",
    "25%",
    "50%",
    "75%",
    "max",
    "unique",
    "top",
    "freq",
];

/// Summary table as CSV, one row per column. Inapplicable cells are empty.
pub fn summary_to_csv(summary: &[ColumnSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SUMMARY_HEADERS)?;

    for row in summary {
        writer.write_record(summary_cells(row))?;
    }

    finish(writer)
}

/// Missing-value rows as CSV.
pub fn missing_to_csv(rows: &[MissingRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["column", "missing_count", "missing_pct"])?;
    for row in rows {
        writer.write_record([
            row.column.clone(),
            row.missing_count.to_string(),
            format_number(row.missing_pct),
        ])?;
    }
    finish(writer)
}

/// Insight messages as `category,message` rows in report order.
pub fn insights_to_csv(report: &InsightReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "message"])?;
    for (category, messages) in report.iter() {
        for message in messages {
            writer.write_record([category.label(), message.as_str()])?;
        }
    }
    finish(writer)
}

fn summary_cells(row: &ColumnSummary) -> [String; 14] {
    let numeric = row.numeric.as_ref();
    let categorical = row.categorical.as_ref();
    [
        row.column.clone(),
        row.dtype.label().to_string(),
        row.count.to_string(),
        format_number(row.missing_pct),
        opt(numeric.map(|n| n.mean)),
        opt(numeric.and_then(|n| n.std)),
        opt(numeric.map(|n| n.min)),
        opt(numeric.map(|n| n.q1)),
        opt(numeric.map(|n| n.median)),
        opt(numeric.map(|n| n.q3)),
        opt(numeric.map(|n| n.max)),
        categorical.map(|c| c.unique.to_string()).unwrap_or_default(),
        categorical.map(|c| c.top.clone()).unwrap_or_default(),
        categorical.map(|c| c.freq.to_string()).unwrap_or_default(),
    ]
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn opt(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

// =============================================================================
// HTML
// =============================================================================

const STYLE: &str = "body{font-family:sans-serif;margin:2em;color:#222}\
table{border-collapse:collapse;margin-bottom:1.5em}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#f3f3f3}\
.flag{color:#b00020}";

/// Self-contained HTML page: source metadata, column types, summary table,
/// missing-value flags and insights grouped by category.
pub fn to_html(result: &AnalysisResult) -> String {
    let mut html = String::new();
    let title = result
        .source
        .as_ref()
        .map(|s| format!("EDA report: {}", s.file))
        .unwrap_or_else(|| "EDA report".to_string());

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{}</h1>\n",
        escape_html(&title),
        escape_html(&title)
    );

    html.push_str("<h2>Overview</h2>\n<table>\n");
    if let Some(source) = &result.source {
        push_pair(&mut html, "File", &source.file);
        push_pair(&mut html, "Format", &source.format);
        push_pair(&mut html, "Size (bytes)", &source.size_bytes.to_string());
        push_pair(&mut html, "SHA-256", &source.hash);
        push_pair(&mut html, "Analyzed at", &source.analyzed_at.to_rfc3339());
    }
    push_pair(&mut html, "Rows", &result.rows.to_string());
    push_pair(&mut html, "Columns", &result.columns.to_string());
    for (kind, names) in result.column_types.buckets() {
        push_pair(&mut html, kind.label(), &names.join(", "));
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Summary</h2>\n<table>\n<tr>");
    for header in SUMMARY_HEADERS {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr>\n");
    for row in &result.summary {
        html.push_str("<tr>");
        for cell in &summary_cells(row) {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Missing values</h2>\n");
    if result.missing_flags.is_empty() {
        html.push_str("<p>No columns above the missing-value threshold.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for row in &result.missing_flags {
            let _ = writeln!(
                html,
                "<li class=\"flag\">Column '{}' has {:.2}% missing values.</li>",
                escape_html(&row.column),
                row.missing_pct
            );
        }
        html.push_str("</ul>\n");
    }

    html.push_str("<h2>Insights</h2>\n");
    for (category, messages) in result.insights.iter() {
        let _ = writeln!(html, "<h3>{}</h3>", escape_html(category.label()));
        if messages.is_empty() {
            html.push_str("<p>None.</p>\n");
            continue;
        }
        html.push_str("<ul>\n");
        for message in messages {
            let _ = writeln!(html, "<li>{}</li>", escape_html(message));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_pair(html: &mut String, key: &str, value: &str) {
    let _ = writeln!(
        html,
        "<tr><th>{}</th><td>{}</td></tr>",
        escape_html(key),
        escape_html(value)
    );
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
