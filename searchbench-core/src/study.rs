//! Study Orchestrator
//!
//! Sweeps every `(size, case)` pair of a [`StudyPlan`], runs both algorithms
//! through the trial runner against the same sequence and target, and returns
//! the accumulated result log.
//!
//! ```text
//! StudyPlan
//!     │
//!     ▼
//! for size (ascending) ──► Sequence::generate(size)
//!     │
//!     ▼
//! for case (listed order) ──► TargetCase::select_target
//!     │
//!     ▼
//! run_trial(linear) + run_trial(binary) ──► ResultRecord ──► observer
//! ```

use crate::error::{Result, StudyError};
use crate::search::Algorithm;
use crate::sequence::Sequence;
use crate::trial::{TrialConfig, TrialStatistics, run_trial};
use rand::Rng;
use searchbench_stats::{Ratio, reduction, speedup};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Input sizes swept when none are configured
pub const DEFAULT_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// How the target of a trial is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetCase {
    /// A present value drawn uniformly from `[1, size]`
    Average,
    /// `size + 1`, guaranteed absent
    Worst,
}

impl TargetCase {
    /// Every case in report order
    pub const ALL: [TargetCase; 2] = [TargetCase::Average, TargetCase::Worst];

    /// Pick the target for a sequence of `1..=size`
    ///
    /// Fails with [`StudyError::ZeroSize`] when `size` is zero, since there is
    /// no present value to draw.
    pub fn select_target<R: Rng + ?Sized>(self, size: usize, rng: &mut R) -> Result<i64> {
        if size == 0 {
            return Err(StudyError::ZeroSize);
        }
        Ok(match self {
            TargetCase::Average => rng.gen_range(1..=size as i64),
            TargetCase::Worst => size as i64 + 1,
        })
    }

    /// Lowercase label
    pub fn label(self) -> &'static str {
        match self {
            TargetCase::Average => "average",
            TargetCase::Worst => "worst",
        }
    }
}

impl std::fmt::Display for TargetCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TargetCase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "average" | "avg" => Ok(TargetCase::Average),
            "worst" => Ok(TargetCase::Worst),
            other => Err(format!("Unknown target case: {}", other)),
        }
    }
}

/// Validated description of a study
///
/// Only built through [`StudyPlan::new`], so every plan has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyPlan {
    sizes: Vec<usize>,
    cases: Vec<TargetCase>,
    trial: TrialConfig,
}

impl StudyPlan {
    /// Build a plan
    ///
    /// Sizes are sorted ascending with duplicates removed; cases keep their
    /// listed order with repeats dropped. A zero size or a zero iteration
    /// count is rejected. Empty lists are accepted and produce an empty log.
    pub fn new(
        sizes: impl IntoIterator<Item = usize>,
        cases: impl IntoIterator<Item = TargetCase>,
        trial: TrialConfig,
    ) -> Result<Self> {
        trial.validate()?;

        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        if sizes.contains(&0) {
            return Err(StudyError::ZeroSize);
        }
        sizes.sort_unstable();
        sizes.dedup();

        let mut unique_cases = Vec::new();
        for case in cases {
            if !unique_cases.contains(&case) {
                unique_cases.push(case);
            }
        }

        Ok(Self {
            sizes,
            cases: unique_cases,
            trial,
        })
    }

    /// Sizes in execution order
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Cases in execution order
    pub fn cases(&self) -> &[TargetCase] {
        &self.cases
    }

    /// Per-trial configuration
    pub fn trial(&self) -> &TrialConfig {
        &self.trial
    }

    /// Number of records a run will produce
    pub fn record_count(&self) -> usize {
        self.sizes.len() * self.cases.len()
    }
}

impl Default for StudyPlan {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            cases: TargetCase::ALL.to_vec(),
            trial: TrialConfig::default(),
        }
    }
}

/// One row of the result log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Sequence length
    pub size: usize,
    /// Target case
    pub case: TargetCase,
    /// Value searched for
    pub target: i64,
    /// Linear search trial
    pub linear: TrialStatistics,
    /// Binary search trial
    pub binary: TrialStatistics,
}

impl ResultRecord {
    /// Trial statistics of `algorithm`
    pub fn stats(&self, algorithm: Algorithm) -> &TrialStatistics {
        match algorithm {
            Algorithm::Linear => &self.linear,
            Algorithm::Binary => &self.binary,
        }
    }

    /// Mean linear time over mean binary time
    pub fn speedup(&self) -> Ratio {
        speedup(self.linear.mean_ns(), self.binary.mean_ns())
    }

    /// Mean linear comparisons over mean binary comparisons
    pub fn reduction(&self) -> Ratio {
        reduction(self.linear.mean_comparisons(), self.binary.mean_comparisons())
    }
}

/// Runs a [`StudyPlan`]
pub struct Study<'a> {
    plan: &'a StudyPlan,
}

impl<'a> Study<'a> {
    /// Create a study over `plan`
    pub fn new(plan: &'a StudyPlan) -> Self {
        Self { plan }
    }

    /// Execute every `(size, case)` pair and return the result log
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<ResultRecord>> {
        self.run_with(rng, |_| {})
    }

    /// Like [`Study::run`], calling `on_record` after each record is complete
    pub fn run_with<R, F>(&self, rng: &mut R, mut on_record: F) -> Result<Vec<ResultRecord>>
    where
        R: Rng + ?Sized,
        F: FnMut(&ResultRecord),
    {
        let mut log = Vec::with_capacity(self.plan.record_count());

        for &size in &self.plan.sizes {
            // Dropped at the end of this iteration, before the next size is built
            let sequence = Sequence::generate(size);
            debug!(size, "generated sequence");

            for &case in &self.plan.cases {
                let target = case.select_target(size, rng)?;
                let record = measure_pair(&sequence, case, target, &self.plan.trial)?;

                debug!(
                    size,
                    case = %case,
                    target,
                    linear_mean_ns = record.linear.mean_ns(),
                    binary_mean_ns = record.binary.mean_ns(),
                    "recorded trial pair"
                );
                on_record(&record);
                log.push(record);
            }
        }

        info!(records = log.len(), "study complete");
        Ok(log)
    }
}

/// Run both algorithms against the same `(sequence, target)`
fn measure_pair(
    sequence: &Sequence,
    case: TargetCase,
    target: i64,
    trial: &TrialConfig,
) -> Result<ResultRecord> {
    let linear = run_trial(Algorithm::Linear.searcher(), sequence, target, trial)?;
    let binary = run_trial(Algorithm::Binary.searcher(), sequence, target, trial)?;

    Ok(ResultRecord {
        size: sequence.len(),
        case,
        target,
        linear,
        binary,
    })
}

/// Execute `plan` and return the result log
pub fn run_study<R: Rng + ?Sized>(plan: &StudyPlan, rng: &mut R) -> Result<Vec<ResultRecord>> {
    Study::new(plan).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_plan(sizes: &[usize], cases: &[TargetCase]) -> StudyPlan {
        StudyPlan::new(
            sizes.iter().copied(),
            cases.iter().copied(),
            TrialConfig::new(5, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_worst_case_target() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(TargetCase::Worst.select_target(1000, &mut rng), Ok(1001));
    }

    #[test]
    fn test_zero_size_target_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        for case in TargetCase::ALL {
            assert_eq!(case.select_target(0, &mut rng), Err(StudyError::ZeroSize));
        }
    }

    #[test]
    fn test_unvalidated_zero_size_plan_errors() {
        // Bypasses StudyPlan::new the way a raw deserializer would
        let plan = StudyPlan {
            sizes: vec![0],
            cases: vec![TargetCase::Average],
            trial: TrialConfig::new(1, 0).unwrap(),
        };
        let result = run_study(&plan, &mut StdRng::seed_from_u64(7));
        assert_eq!(result, Err(StudyError::ZeroSize));
    }

    #[test]
    fn test_average_case_target_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let t = TargetCase::Average.select_target(50, &mut rng).unwrap();
            assert!((1..=50).contains(&t));
        }
    }

    #[test]
    fn test_case_parsing() {
        assert_eq!("average".parse::<TargetCase>(), Ok(TargetCase::Average));
        assert_eq!(" Worst ".parse::<TargetCase>(), Ok(TargetCase::Worst));
        assert!("best".parse::<TargetCase>().is_err());
    }

    #[test]
    fn test_plan_sorts_and_dedups() {
        let plan = small_plan(
            &[10_000, 100, 1_000, 100],
            &[TargetCase::Worst, TargetCase::Average, TargetCase::Worst],
        );

        assert_eq!(plan.sizes(), &[100, 1_000, 10_000]);
        assert_eq!(plan.cases(), &[TargetCase::Worst, TargetCase::Average]);
        assert_eq!(plan.record_count(), 6);
    }

    #[test]
    fn test_plan_rejects_zero_size() {
        let err = StudyPlan::new([10, 0], TargetCase::ALL, TrialConfig::default()).unwrap_err();
        assert_eq!(err, StudyError::ZeroSize);
    }

    #[test]
    fn test_plan_rejects_zero_iterations() {
        let trial = TrialConfig {
            iterations: 0,
            warmup_iterations: 0,
        };
        let err = StudyPlan::new([10], TargetCase::ALL, trial).unwrap_err();
        assert_eq!(err, StudyError::ZeroIterations);
    }

    #[test]
    fn test_default_plan() {
        let plan = StudyPlan::default();
        assert_eq!(plan.sizes(), &DEFAULT_SIZES);
        assert_eq!(plan.cases(), &TargetCase::ALL);
        assert_eq!(plan.trial().iterations, 100);
    }

    #[test]
    fn test_run_produces_one_record_per_pair_in_order() {
        let plan = small_plan(&[100, 10], &TargetCase::ALL);
        let mut rng = StdRng::seed_from_u64(42);
        let log = run_study(&plan, &mut rng).unwrap();

        let keys: Vec<_> = log.iter().map(|r| (r.size, r.case)).collect();
        assert_eq!(
            keys,
            vec![
                (10, TargetCase::Average),
                (10, TargetCase::Worst),
                (100, TargetCase::Average),
                (100, TargetCase::Worst),
            ]
        );
    }

    #[test]
    fn test_worst_case_records() {
        let plan = small_plan(&[1_000], &[TargetCase::Worst]);
        let mut rng = StdRng::seed_from_u64(1);
        let log = run_study(&plan, &mut rng).unwrap();
        let record = &log[0];

        assert_eq!(record.target, 1_001);
        assert_eq!(record.linear.position, None);
        assert_eq!(record.binary.position, None);
        assert_eq!(record.linear.mean_comparisons(), 1_000.0);
        assert_eq!(record.binary.mean_comparisons(), 10.0);
        assert_eq!(record.reduction(), Ratio::Defined(100.0));
    }

    #[test]
    fn test_average_case_both_algorithms_agree() {
        let plan = small_plan(&[10, 1_000, 5_000], &[TargetCase::Average]);
        let mut rng = StdRng::seed_from_u64(99);
        let log = run_study(&plan, &mut rng).unwrap();

        for record in &log {
            assert!(record.linear.position.is_some());
            assert_eq!(record.linear.position, record.binary.position);
            assert_eq!(record.linear.position, Some(record.target as usize - 1));
            assert_eq!(record.linear.mean_comparisons(), record.target as f64);
        }
    }

    #[test]
    fn test_seeded_runs_pick_same_targets() {
        let plan = small_plan(&[1_000, 10_000], &[TargetCase::Average]);
        let a = run_study(&plan, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = run_study(&plan, &mut StdRng::seed_from_u64(5)).unwrap();

        let targets_a: Vec<_> = a.iter().map(|r| r.target).collect();
        let targets_b: Vec<_> = b.iter().map(|r| r.target).collect();
        assert_eq!(targets_a, targets_b);
    }

    #[test]
    fn test_empty_lists_yield_empty_log() {
        let mut rng = StdRng::seed_from_u64(0);

        let no_sizes = StudyPlan::new([], TargetCase::ALL, TrialConfig::default()).unwrap();
        assert!(run_study(&no_sizes, &mut rng).unwrap().is_empty());

        let no_cases = StudyPlan::new([10], [], TrialConfig::default()).unwrap();
        assert!(run_study(&no_cases, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_observer_sees_every_record() {
        let plan = small_plan(&[10, 20], &TargetCase::ALL);
        let mut seen = Vec::new();
        let log = Study::new(&plan)
            .run_with(&mut StdRng::seed_from_u64(3), |r| seen.push((r.size, r.case)))
            .unwrap();

        assert_eq!(seen.len(), log.len());
        assert_eq!(seen[0], (10, TargetCase::Average));
    }

    #[test]
    fn test_stats_accessor() {
        let plan = small_plan(&[10], &[TargetCase::Worst]);
        let log = run_study(&plan, &mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(log[0].stats(Algorithm::Linear).algorithm, "linear");
        assert_eq!(log[0].stats(Algorithm::Binary).algorithm, "binary");
    }
}
