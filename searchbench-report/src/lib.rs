#![warn(missing_docs)]
//! SearchBench Report - Result Export
//!
//! Wraps a study's result log with metadata and renders it as:
//! - JSON (machine-readable, round-trips)
//! - CSV (spreadsheet-compatible, one row per record)
//!
//! Human-readable console output lives with the CLI.

mod csv;
mod json;
mod report;

pub use csv::{CSV_COLUMNS, generate_csv_report};
pub use json::{generate_json_report, parse_json_report};
pub use report::{
    ComparisonSeries, GrowthEntry, RecordComparison, Report, ReportConfig, ReportMeta,
    ReportSummary, SCHEMA_VERSION, SeriesMetric, SystemInfo,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full metadata
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
