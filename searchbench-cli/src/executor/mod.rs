//! Study Executor
//!
//! Runs a resolved study and turns its result log into output.
//!
//! ## Pipeline Overview
//!
//! ```text
//! StudyPlan + seeded Rng
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Pin CPU, run the study, drive the progress bar
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Ratios, series tables, growth exponents
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Study execution with progress display
//! - [`report`] - Report building from the result log
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;

// Re-export public API
pub use execution::{ExecutionConfig, StudyExecutor};
pub use formatting::{format_human_output, format_probe_output};
pub use metadata::build_report_meta;
pub use report::{build_report, build_series};
