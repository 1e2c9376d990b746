//! Guarded Ratios
//!
//! Speedup (elapsed time) and reduction (comparison count) are both
//! `baseline / candidate`. A zero or non-finite operand makes the ratio
//! undefined instead of producing `inf` or `NaN`.

use serde::{Deserialize, Serialize};

/// A ratio that may be undefined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Ratio {
    /// Finite quotient
    Defined(f64),
    /// Denominator was zero or an operand was not finite
    Undefined,
}

impl Ratio {
    /// `numerator / denominator`, undefined for a zero denominator
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
            return Ratio::Undefined;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            Ratio::Defined(value)
        } else {
            Ratio::Undefined
        }
    }

    /// The quotient, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(*v),
            Ratio::Undefined => None,
        }
    }

    /// Whether the quotient is defined
    pub fn is_defined(&self) -> bool {
        matches!(self, Ratio::Defined(_))
    }
}

impl From<Option<f64>> for Ratio {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Ratio::Defined(v),
            _ => Ratio::Undefined,
        }
    }
}

impl From<Ratio> for Option<f64> {
    fn from(ratio: Ratio) -> Self {
        ratio.value()
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ratio::Defined(v) => write!(f, "{:.2}x", v),
            Ratio::Undefined => write!(f, "undefined"),
        }
    }
}

/// How many times faster the candidate ran than the baseline
pub fn speedup(baseline_mean_ns: f64, candidate_mean_ns: f64) -> Ratio {
    Ratio::of(baseline_mean_ns, candidate_mean_ns)
}

/// How many times fewer comparisons the candidate made than the baseline
pub fn reduction(baseline_mean_comparisons: f64, candidate_mean_comparisons: f64) -> Ratio {
    Ratio::of(baseline_mean_comparisons, candidate_mean_comparisons)
}
