//! Report Building
//!
//! Turns the result log into a [`Report`]:
//!
//! ```text
//! Vec<ResultRecord>
//!        │
//!        ├──► RecordComparison   speedup / reduction per record
//!        ├──► ComparisonSeries   time, comparisons, speedup by size
//!        └──► GrowthEntry        log-log slope over worst-case records
//!                    │
//!                    ▼
//!                 Report
//! ```

use super::metadata::build_report_meta;
use searchbench_core::{Algorithm, ResultRecord, TargetCase};
use searchbench_report::{
    ComparisonSeries, GrowthEntry, RecordComparison, Report, ReportConfig, ReportSummary,
    SeriesMetric,
};
use searchbench_stats::{GrowthPoint, fit_growth_exponent};

/// Build a complete Report from the result log
pub fn build_report(
    records: Vec<ResultRecord>,
    config: ReportConfig,
    total_duration_ms: f64,
) -> Report {
    let comparisons = records.iter().map(RecordComparison::from).collect();
    let series = build_series(&records);
    let summary = ReportSummary {
        total_records: records.len(),
        total_duration_ms,
        growth: Algorithm::ALL
            .iter()
            .map(|&algorithm| growth_entry(&records, algorithm))
            .collect(),
    };

    Report {
        meta: build_report_meta(config),
        records,
        comparisons,
        series,
        summary,
    }
}

/// Time, comparison and speedup tables across sizes
pub fn build_series(records: &[ResultRecord]) -> Vec<ComparisonSeries> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut sizes: Vec<usize> = records.iter().map(|r| r.size).collect();
    sizes.sort_unstable();
    sizes.dedup();

    let mut cases: Vec<TargetCase> = Vec::new();
    for r in records {
        if !cases.contains(&r.case) {
            cases.push(r.case);
        }
    }

    let lookup = |size: usize, case: TargetCase| {
        records
            .iter()
            .find(|r| r.size == size && r.case == case)
    };

    let per_algorithm = |title: &str,
                         metric: SeriesMetric,
                         value: fn(&ResultRecord, Algorithm) -> f64| {
        let mut names: Vec<String> = Vec::new();
        let mut data: Vec<Vec<Option<f64>>> = Vec::new();
        for &algorithm in &Algorithm::ALL {
            for &case in &cases {
                names.push(format!("{}/{}", algorithm, case));
                data.push(
                    sizes
                        .iter()
                        .map(|&size| lookup(size, case).map(|r| value(r, algorithm)))
                        .collect(),
                );
            }
        }
        ComparisonSeries {
            title: title.to_string(),
            metric,
            x_values: sizes.clone(),
            series_names: names,
            series_data: data,
        }
    };

    let time = per_algorithm("Elapsed time by size", SeriesMetric::MeanTimeNs, |r, a| {
        r.stats(a).mean_ns()
    });
    let comparisons = per_algorithm(
        "Comparisons by size",
        SeriesMetric::MeanComparisons,
        |r, a| r.stats(a).mean_comparisons(),
    );

    let speedup = ComparisonSeries {
        title: "Speedup of binary over linear".to_string(),
        metric: SeriesMetric::Speedup,
        x_values: sizes.clone(),
        series_names: cases.iter().map(|c| c.to_string()).collect(),
        series_data: cases
            .iter()
            .map(|&case| {
                sizes
                    .iter()
                    .map(|&size| lookup(size, case).and_then(|r| r.speedup().value()))
                    .collect()
            })
            .collect(),
    };

    vec![time, comparisons, speedup]
}

/// Fit growth over worst-case records, where both algorithms do maximal work
fn growth_entry(records: &[ResultRecord], algorithm: Algorithm) -> GrowthEntry {
    let worst: Vec<&ResultRecord> = records
        .iter()
        .filter(|r| r.case == TargetCase::Worst)
        .collect();

    let fit = |cost: fn(&ResultRecord, Algorithm) -> f64| {
        let points: Vec<GrowthPoint> = worst
            .iter()
            .map(|r| GrowthPoint {
                size: r.size as f64,
                cost: cost(r, algorithm),
            })
            .collect();
        fit_growth_exponent(&points).ok()
    };

    GrowthEntry {
        algorithm,
        comparisons_exponent: fit(|r, a| r.stats(a).mean_comparisons()),
        time_exponent: fit(|r, a| r.stats(a).mean_ns()),
    }
}
