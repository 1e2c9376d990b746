//! CSV Output
//!
//! One row per result record, for spreadsheets and offline plotting.

use crate::report::Report;
use std::fmt::Write;

/// Column names, in row order
pub const CSV_COLUMNS: [&str; 11] = [
    "size",
    "case",
    "target",
    "linear_mean_ns",
    "linear_std_ns",
    "binary_mean_ns",
    "binary_std_ns",
    "linear_mean_comparisons",
    "linear_std_comparisons",
    "binary_mean_comparisons",
    "binary_std_comparisons",
];

/// Generate a CSV report with a header line
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = CSV_COLUMNS.join(",");
    output.push('\n');

    for r in &report.records {
        // Writing into a String cannot fail
        let _ = writeln!(
            output,
            "{},{},{},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
            r.size,
            r.case,
            r.target,
            r.linear.mean_ns(),
            r.linear.std_dev_ns(),
            r.binary.mean_ns(),
            r.binary.std_dev_ns(),
            r.linear.mean_comparisons(),
            r.linear.std_dev_comparisons(),
            r.binary.mean_comparisons(),
            r.binary.std_dev_comparisons(),
        );
    }

    output
}
