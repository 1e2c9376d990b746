#![warn(missing_docs)]
//! SearchBench Core - Algorithms and Measurement
//!
//! This crate provides everything a study measures and how it measures it:
//! - `Sequence` generation (the sorted input `1..=size`)
//! - `LinearSearch` and `BinarySearch` behind the `SearchAlgorithm` trait
//! - Monotonic per-invocation timing and optional CPU pinning
//! - The trial runner (repeat, time, reduce to mean and std dev)
//! - The study orchestrator sweeping sizes and target cases

mod error;
mod measure;
mod search;
mod sequence;
mod study;
mod trial;

pub use error::{Result, StudyError};
pub use measure::{Timer, pin_to_cpu};
pub use search::{Algorithm, BinarySearch, LinearSearch, SearchAlgorithm, SearchOutcome};
pub use sequence::Sequence;
pub use study::{DEFAULT_SIZES, ResultRecord, Study, StudyPlan, TargetCase, run_study};
pub use trial::{TrialConfig, TrialStatistics, run_trial};
