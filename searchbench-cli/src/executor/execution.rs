//! Study Execution
//!
//! Drives the core orchestrator with terminal feedback. The progress bar is
//! advanced from the per-record observer, so it only draws between
//! `(size, case)` pairs and never inside a timed loop.
//!
//! ```text
//! StudyPlan + Rng
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  StudyExecutor   │  pin CPU → Study::run_with → progress per record
//! └────────┬─────────┘
//!          │
//!          ▼
//!  Vec<ResultRecord>
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use searchbench_core::{ResultRecord, Study, StudyPlan, pin_to_cpu};
use tracing::{debug, warn};

/// Configuration for study execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionConfig {
    /// Show a progress bar on stderr
    pub show_progress: bool,
    /// Pin the measuring thread to this core
    pub pin_cpu: Option<usize>,
}

/// Runs a study with progress reporting
pub struct StudyExecutor {
    config: ExecutionConfig,
}

impl StudyExecutor {
    /// Create an executor with the given configuration
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Pin if requested; returns the core actually pinned to
    pub fn pin(&self) -> Option<usize> {
        let cpu = self.config.pin_cpu?;
        match pin_to_cpu(cpu) {
            Ok(()) => {
                debug!(cpu, "pinned measuring thread");
                Some(cpu)
            }
            Err(e) => {
                warn!(cpu, error = %e, "failed to pin measuring thread; continuing unpinned");
                None
            }
        }
    }

    /// Execute every `(size, case)` pair of `plan`
    pub fn execute<R: Rng + ?Sized>(
        &self,
        plan: &StudyPlan,
        rng: &mut R,
    ) -> searchbench_core::Result<Vec<ResultRecord>> {
        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(plan.record_count() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let result = Study::new(plan).run_with(rng, |record| {
            pb.set_message(format!("size {} {}", record.size, record.case));
            pb.inc(1);
        });

        match &result {
            Ok(_) => pb.finish_with_message("Complete"),
            Err(_) => pb.abandon_with_message("Failed"),
        }
        result
    }
}
