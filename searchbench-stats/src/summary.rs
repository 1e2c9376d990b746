//! Summary Statistics
//!
//! Reduces a series of repeated observations (elapsed nanoseconds, comparison
//! counts) to central tendency and dispersion. Every sample is kept: a search
//! trial has no warm-up noise to clean away, and the comparison series is
//! constant by construction.

use serde::{Deserialize, Serialize};

/// Summary of one observed series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator, 0 for fewer than two samples)
    pub std_dev: f64,
    /// Median (mean of the two middle values for even counts)
    pub median: f64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
    /// Number of observations
    pub sample_count: usize,
}

impl SummaryStatistics {
    /// Summary of an empty series: all zeros
    pub const EMPTY: Self = Self {
        mean: 0.0,
        std_dev: 0.0,
        median: 0.0,
        min: 0.0,
        max: 0.0,
        sample_count: 0,
    };

    /// Coefficient of variation in percent (0 when the mean is 0)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }

    /// Whether every observation was identical
    pub fn is_constant(&self) -> bool {
        self.sample_count > 0 && self.min == self.max
    }
}

/// Compute summary statistics over `samples`
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::EMPTY;
    }

    let n = samples.len();
    let mean = samples.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    SummaryStatistics {
        mean,
        std_dev,
        median,
        min: sorted[0],
        max: sorted[n - 1],
        sample_count: n,
    }
}

/// Convenience for integer series such as comparison counts
pub fn compute_summary_u64(samples: &[u64]) -> SummaryStatistics {
    let as_f64: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    compute_summary(&as_f64)
}
