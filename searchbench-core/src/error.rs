//! Error types

use crate::search::SearchOutcome;

/// Errors raised while planning or running a study
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudyError {
    /// A trial needs at least one timed invocation
    #[error("iteration count must be at least 1")]
    ZeroIterations,
    /// Sizes must be positive
    #[error("input size must be at least 1")]
    ZeroSize,
    /// A repeated invocation disagreed with the first one
    #[error(
        "{algorithm} search is not deterministic: iteration {iteration} returned ({actual}), expected ({expected})"
    )]
    NondeterministicOutcome {
        /// Algorithm identifier
        algorithm: &'static str,
        /// Zero-based index of the disagreeing invocation
        iteration: usize,
        /// Outcome of the first invocation
        expected: SearchOutcome,
        /// Outcome of the disagreeing invocation
        actual: SearchOutcome,
    },
}

/// Result alias for study operations
pub type Result<T> = std::result::Result<T, StudyError>;
