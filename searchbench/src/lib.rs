#![warn(missing_docs)]
//! # SearchBench
//!
//! An educational benchmark comparing linear and binary search over sorted
//! integer sequences.
//!
//! SearchBench sweeps a set of input sizes and target cases, repeats each
//! search many times, and reports:
//! - **Elapsed time**: mean and standard deviation per invocation, in nanoseconds
//! - **Comparisons**: the deterministic element-to-target comparison count
//! - **Ratios**: linear over binary for time ("speedup") and comparisons ("reduction")
//! - **Growth**: log-log slope of comparisons against size for each algorithm
//! - **Exports**: human console report, CSV and JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use searchbench::prelude::*;
//! use rand::SeedableRng;
//!
//! let plan = StudyPlan::new([1_000, 10_000], TargetCase::ALL, TrialConfig::default())?;
//! let records = run_study(&plan, &mut rand::rngs::StdRng::seed_from_u64(42))?;
//! for record in &records {
//!     println!("{} {}: speedup {}", record.size, record.case, record.speedup());
//! }
//! ```
//!
//! ## Single Searches
//!
//! ```ignore
//! let sequence = Sequence::generate(10);
//! let outcome = BinarySearch.search(&sequence, 7);
//! assert_eq!(outcome, SearchOutcome::found(6, 4));
//! ```

// Re-export core types
pub use searchbench_core::{
    Algorithm, BinarySearch, DEFAULT_SIZES, LinearSearch, ResultRecord, SearchAlgorithm,
    SearchOutcome, Sequence, Study, StudyError, StudyPlan, TargetCase, Timer, TrialConfig,
    TrialStatistics, pin_to_cpu, run_study, run_trial,
};

// Re-export stats
pub use searchbench_stats::{
    DEFAULT_ITERATIONS, GrowthError, GrowthPoint, Ratio, SummaryStatistics, compute_summary,
    compute_summary_u64, fit_growth_exponent, reduction, speedup,
};

// Re-export report types
pub use searchbench_report::{
    CSV_COLUMNS, ComparisonSeries, GrowthEntry, OutputFormat, RecordComparison, Report,
    ReportConfig, ReportMeta, ReportSummary, SeriesMetric, generate_csv_report,
    generate_json_report, parse_json_report,
};

// Re-export CLI building blocks
pub use searchbench_cli::{
    SearchBenchConfig, build_report, execute_study, format_human_output, probe, render_report,
    resolve_study,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, BinarySearch, LinearSearch, ResultRecord, SearchAlgorithm, SearchOutcome,
        Sequence, StudyPlan, TargetCase, TrialConfig, run_study,
    };
}

/// Run the SearchBench CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     searchbench::run().unwrap();
/// }
/// ```
pub use searchbench_cli::run;
