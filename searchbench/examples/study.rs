//! Run a small seeded study and print the console report.
//!
//! ```text
//! cargo run --example study -p searchbench
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use searchbench::prelude::*;
use searchbench::{ReportConfig, build_report, format_human_output};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = 42;
    let plan = StudyPlan::new([100, 1_000, 10_000], TargetCase::ALL, TrialConfig::new(50, 5)?)?;
    let records = run_study(&plan, &mut StdRng::seed_from_u64(seed))?;

    let config = ReportConfig {
        sizes: plan.sizes().to_vec(),
        cases: plan.cases().to_vec(),
        iterations: plan.trial().iterations,
        warmup_iterations: plan.trial().warmup_iterations,
        seed: Some(seed),
        pinned_cpu: None,
    };
    let report = build_report(records, config, 0.0);
    print!("{}", format_human_output(&report));

    // The quick check from the console: one search of 7 in 1..=10
    let sequence = Sequence::generate(10);
    for algorithm in Algorithm::ALL {
        println!("{}: {}", algorithm, algorithm.searcher().search(&sequence, 7));
    }

    Ok(())
}
