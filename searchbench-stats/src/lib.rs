#![warn(missing_docs)]
//! SearchBench Statistical Engine
//!
//! Reduces repeated search trials to numbers worth reporting:
//! - Mean, standard deviation, median and extremes of a series
//! - Speedup and reduction ratios guarded against zero denominators
//! - Log-log growth exponents across input sizes

mod growth;
mod ratio;
mod summary;

pub use growth::{GrowthError, GrowthPoint, fit_growth_exponent};
pub use ratio::{Ratio, reduction, speedup};
pub use summary::{SummaryStatistics, compute_summary, compute_summary_u64};

/// Default number of timed invocations per trial
pub const DEFAULT_ITERATIONS: usize = 100;
