//! Output Formatting
//!
//! Human-readable output formatting for study reports.
//!
//! Generates terminal-friendly output with:
//! - One block per result record (target, timing, comparisons, ratios)
//! - Series tables across sizes in place of charts
//! - Growth exponents per algorithm
//! - Run summary

use searchbench_core::{Algorithm, SearchOutcome};
use searchbench_report::{ComparisonSeries, Report, SeriesMetric};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SearchBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let config = &report.meta.config;
    output.push_str(&format!(
        "  iterations: {}  warmup: {}  seed: {}\n",
        config.iterations,
        config.warmup_iterations,
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "  system: {} {} ({}, {} cores)\n\n",
        report.meta.system.os,
        report.meta.system.arch,
        report.meta.system.cpu,
        report.meta.system.cpu_cores
    ));

    for record in &report.records {
        output.push_str(&format!(
            "Size {} / {} case (target {})\n",
            record.size, record.case, record.target
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for algorithm in Algorithm::ALL {
            let stats = record.stats(algorithm);
            output.push_str(&format!(
                "  {:<8} mean: {:>12.2} ns ± {:<10.2}  comparisons: {:.1}\n",
                algorithm.to_string(),
                stats.mean_ns(),
                stats.std_dev_ns(),
                stats.mean_comparisons()
            ));
        }
        output.push_str(&format!(
            "  speedup: {}  reduction: {}\n\n",
            record.speedup(),
            record.reduction()
        ));
    }

    for series in &report.series {
        format_series(&mut output, series);
    }

    let fitted: Vec<_> = report
        .summary
        .growth
        .iter()
        .filter(|g| g.comparisons_exponent.is_some() || g.time_exponent.is_some())
        .collect();
    if !fitted.is_empty() {
        output.push_str("\nGrowth (worst case, log-log slope)\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in fitted {
            output.push_str(&format!(
                "  {:<8} comparisons: {:>6}  time: {:>6}\n",
                entry.algorithm.to_string(),
                format_exponent(entry.comparisons_exponent),
                format_exponent(entry.time_exponent)
            ));
        }
    }

    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!("  Records: {}\n", report.summary.total_records));
    output.push_str(&format!(
        "  Duration: {:.2} ms\n",
        report.summary.total_duration_ms
    ));

    output
}

/// Format the single-invocation outcomes of the `probe` command
pub fn format_probe_output(
    size: usize,
    target: i64,
    outcomes: &[(Algorithm, SearchOutcome)],
) -> String {
    let mut output = format!("Probe: size {}, target {}\n", size, target);
    for (algorithm, outcome) in outcomes {
        output.push_str(&format!("  {:<8} {}\n", algorithm.to_string(), outcome));
    }
    output
}

fn format_series(output: &mut String, series: &ComparisonSeries) {
    output.push_str(&format!("\n{} ({})\n", series.title, series.metric.label()));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let max_name_len = series
        .series_names
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(12);

    let col_width = series
        .x_values
        .iter()
        .map(|x| x.to_string().len())
        .max()
        .unwrap_or(8)
        .max(10);

    // Header row with sizes
    output.push_str(&format!("  {:<width$}", "", width = max_name_len));
    for x in &series.x_values {
        output.push_str(&format!(" | {:>w$}", x, w = col_width));
    }
    output.push('\n');

    output.push_str(&format!("  {}", "-".repeat(max_name_len)));
    for _ in &series.x_values {
        output.push_str(&format!("-+-{}", "-".repeat(col_width)));
    }
    output.push('\n');

    for (series_idx, name) in series.series_names.iter().enumerate() {
        output.push_str(&format!("  {:<width$}", name, width = max_name_len));
        for x_idx in 0..series.x_values.len() {
            let value = series
                .series_data
                .get(series_idx)
                .and_then(|row| row.get(x_idx))
                .copied()
                .flatten();
            let formatted = format_cell(value, series.metric);
            output.push_str(&format!(" | {:>w$}", formatted, w = col_width));
        }
        output.push('\n');
    }
}

fn format_cell(value: Option<f64>, metric: SeriesMetric) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    if metric == SeriesMetric::Speedup {
        return format!("{:.2}x", value);
    }
    if value.abs() >= 1_000_000.0 || (value.abs() < 0.001 && value != 0.0) {
        format!("{:.2e}", value)
    } else if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn format_exponent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "undefined".to_string())
}
