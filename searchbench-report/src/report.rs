//! Report Data Structures

use chrono::{DateTime, Utc};
use searchbench_core::{Algorithm, ResultRecord, TargetCase};
use searchbench_stats::Ratio;
use serde::{Deserialize, Serialize};

/// Version of the JSON layout below
pub const SCHEMA_VERSION: u32 = 1;

/// Complete study report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    /// The result log, one record per (size, case)
    pub records: Vec<ResultRecord>,
    /// Speedup and reduction per record, same order as `records`
    pub comparisons: Vec<RecordComparison>,
    /// Per-size series for tables and charts
    pub series: Vec<ComparisonSeries>,
    pub summary: ReportSummary,
}

/// Linear-over-binary ratios of one record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordComparison {
    pub size: usize,
    pub case: TargetCase,
    /// Mean elapsed time ratio
    pub speedup: Ratio,
    /// Mean comparison count ratio
    pub reduction: Ratio,
}

impl From<&ResultRecord> for RecordComparison {
    fn from(record: &ResultRecord) -> Self {
        Self {
            size: record.size,
            case: record.case,
            speedup: record.speedup(),
            reduction: record.reduction(),
        }
    }
}

/// Metric plotted by a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMetric {
    /// Mean elapsed nanoseconds
    MeanTimeNs,
    /// Mean comparison count
    MeanComparisons,
    /// Linear over binary mean time
    Speedup,
}

impl SeriesMetric {
    /// Column label
    pub fn label(self) -> &'static str {
        match self {
            SeriesMetric::MeanTimeNs => "mean time (ns)",
            SeriesMetric::MeanComparisons => "mean comparisons",
            SeriesMetric::Speedup => "speedup",
        }
    }
}

/// A metric across sizes, one row per named series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSeries {
    /// Table title
    pub title: String,
    /// Plotted metric
    pub metric: SeriesMetric,
    /// Sizes in ascending order
    pub x_values: Vec<usize>,
    /// Row labels (e.g. "linear/worst")
    pub series_names: Vec<String>,
    /// `series_data[row][x]`; `None` where a value is missing or undefined
    pub series_data: Vec<Vec<Option<f64>>>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Study configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub sizes: Vec<usize>,
    pub cases: Vec<TargetCase>,
    pub iterations: usize,
    pub warmup_iterations: usize,
    /// Seed of the average-case target generator, if fixed
    pub seed: Option<u64>,
    /// Core the measuring thread was pinned to
    pub pinned_cpu: Option<usize>,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu: String,
    pub cpu_cores: u32,
}

/// Fitted log-log slope for one algorithm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthEntry {
    pub algorithm: Algorithm,
    /// Slope of ln(mean comparisons) over ln(size)
    pub comparisons_exponent: Option<f64>,
    /// Slope of ln(mean ns) over ln(size)
    pub time_exponent: Option<f64>,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_records: usize,
    pub total_duration_ms: f64,
    /// Growth fitted over worst-case records
    pub growth: Vec<GrowthEntry>,
}
