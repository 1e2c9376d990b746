//! Trial Runner
//!
//! Repeats one search against a fixed `(sequence, target)` pair and reduces the
//! per-invocation readings to [`TrialStatistics`]. Each invocation is timed on
//! its own; nothing is printed or logged inside the timed loop.

use crate::error::{Result, StudyError};
use crate::measure::Timer;
use crate::search::{SearchAlgorithm, SearchOutcome};
use searchbench_stats::{DEFAULT_ITERATIONS, SummaryStatistics, compute_summary_u64};
use serde::{Deserialize, Serialize};

/// How many times a trial invokes the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Timed invocations (at least 1)
    pub iterations: usize,
    /// Untimed invocations before the timed loop
    pub warmup_iterations: usize,
}

impl TrialConfig {
    /// Build a validated config
    pub fn new(iterations: usize, warmup_iterations: usize) -> Result<Self> {
        let config = Self {
            iterations,
            warmup_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero iteration count
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(StudyError::ZeroIterations);
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmup_iterations: 0,
        }
    }
}

/// Aggregated readings of one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialStatistics {
    /// Algorithm identifier
    pub algorithm: String,
    /// Timed invocations
    pub iterations: usize,
    /// Elapsed nanoseconds per invocation
    pub elapsed_ns: SummaryStatistics,
    /// Comparisons per invocation
    pub comparisons: SummaryStatistics,
    /// Position returned by the final invocation
    pub position: Option<usize>,
}

impl TrialStatistics {
    /// Mean elapsed nanoseconds
    pub fn mean_ns(&self) -> f64 {
        self.elapsed_ns.mean
    }

    /// Standard deviation of elapsed nanoseconds
    pub fn std_dev_ns(&self) -> f64 {
        self.elapsed_ns.std_dev
    }

    /// Mean comparison count
    pub fn mean_comparisons(&self) -> f64 {
        self.comparisons.mean
    }

    /// Standard deviation of the comparison count
    pub fn std_dev_comparisons(&self) -> f64 {
        self.comparisons.std_dev
    }
}

/// Accumulates invocation readings and enforces the determinism invariant
struct TrialRecorder {
    algorithm: &'static str,
    elapsed_ns: Vec<u64>,
    comparisons: Vec<u64>,
    first: Option<SearchOutcome>,
    last: Option<SearchOutcome>,
}

impl TrialRecorder {
    fn new(algorithm: &'static str, capacity: usize) -> Self {
        Self {
            algorithm,
            elapsed_ns: Vec::with_capacity(capacity),
            comparisons: Vec::with_capacity(capacity),
            first: None,
            last: None,
        }
    }

    #[inline]
    fn record(&mut self, iteration: usize, elapsed_ns: u64, outcome: SearchOutcome) -> Result<()> {
        match self.first {
            None => self.first = Some(outcome),
            Some(expected) if expected != outcome => {
                return Err(StudyError::NondeterministicOutcome {
                    algorithm: self.algorithm,
                    iteration,
                    expected,
                    actual: outcome,
                });
            }
            Some(_) => {}
        }

        self.elapsed_ns.push(elapsed_ns);
        self.comparisons.push(outcome.comparisons);
        self.last = Some(outcome);
        Ok(())
    }

    fn finish(self) -> TrialStatistics {
        TrialStatistics {
            algorithm: self.algorithm.to_string(),
            iterations: self.elapsed_ns.len(),
            elapsed_ns: compute_summary_u64(&self.elapsed_ns),
            comparisons: compute_summary_u64(&self.comparisons),
            position: self.last.and_then(|o| o.position),
        }
    }
}

/// Run `algorithm` against `(haystack, target)` as configured
///
/// Fails before any invocation when `config.iterations` is zero, and aborts
/// when an invocation's outcome differs from the first one.
pub fn run_trial<A>(
    algorithm: &A,
    haystack: &[i64],
    target: i64,
    config: &TrialConfig,
) -> Result<TrialStatistics>
where
    A: SearchAlgorithm + ?Sized,
{
    config.validate()?;

    for _ in 0..config.warmup_iterations {
        let _ = std::hint::black_box(
            algorithm.search(std::hint::black_box(haystack), std::hint::black_box(target)),
        );
    }

    let mut recorder = TrialRecorder::new(algorithm.id(), config.iterations);

    for iteration in 0..config.iterations {
        let timer = Timer::start();
        let outcome = std::hint::black_box(
            algorithm.search(std::hint::black_box(haystack), std::hint::black_box(target)),
        );
        let elapsed_ns = timer.stop();

        recorder.record(iteration, elapsed_ns, outcome)?;
    }

    Ok(recorder.finish())
}
