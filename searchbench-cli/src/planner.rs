//! Study Planner
//!
//! Layers command-line overrides on top of the configuration file and
//! validates the result at the boundary, before anything is measured:
//! - Size and case lists must be non-empty
//! - Sizes and the iteration count must be positive
//! - Case labels and the output format must be known

use crate::config::SearchBenchConfig;
use searchbench_core::{StudyPlan, TargetCase, TrialConfig};
use searchbench_report::OutputFormat;
use std::path::PathBuf;

/// Command-line values that override the configuration file
#[derive(Debug, Clone, Default)]
pub struct PlanOverrides {
    pub sizes: Vec<usize>,
    pub cases: Vec<String>,
    pub iterations: Option<usize>,
    pub warmup_iterations: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub pin_cpu: Option<usize>,
}

/// Everything needed to run and report one study
#[derive(Debug, Clone)]
pub struct ResolvedStudy {
    pub plan: StudyPlan,
    /// Seed from CLI or config; `None` means draw one at run time
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub pin_cpu: Option<usize>,
}

/// Build a validated study from config + overrides
pub fn resolve_study(
    config: &SearchBenchConfig,
    overrides: &PlanOverrides,
) -> anyhow::Result<ResolvedStudy> {
    let sizes = if overrides.sizes.is_empty() {
        config.study.sizes.clone()
    } else {
        overrides.sizes.clone()
    };
    if sizes.is_empty() {
        return Err(anyhow::anyhow!("No input sizes configured"));
    }

    let case_labels = if overrides.cases.is_empty() {
        &config.study.cases
    } else {
        &overrides.cases
    };
    if case_labels.is_empty() {
        return Err(anyhow::anyhow!("No target cases configured"));
    }
    let cases = case_labels
        .iter()
        .map(|label| label.parse::<TargetCase>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let trial = TrialConfig::new(
        overrides.iterations.unwrap_or(config.study.iterations),
        overrides
            .warmup_iterations
            .unwrap_or(config.study.warmup_iterations),
    )?;
    let plan = StudyPlan::new(sizes, cases, trial)?;

    let format = overrides
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::msg)?;

    Ok(ResolvedStudy {
        plan,
        seed: overrides.seed.or(config.study.seed),
        format,
        output: overrides
            .output
            .clone()
            .or_else(|| config.output.path.as_ref().map(PathBuf::from)),
        pin_cpu: overrides.pin_cpu.or(config.runner.pin_cpu),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let study =
            resolve_study(&SearchBenchConfig::default(), &PlanOverrides::default()).unwrap();

        assert_eq!(study.plan.sizes(), &[1_000, 10_000, 100_000]);
        assert_eq!(study.plan.cases(), &[TargetCase::Average, TargetCase::Worst]);
        assert_eq!(study.plan.trial().iterations, 100);
        assert_eq!(study.format, OutputFormat::Human);
        assert_eq!(study.output, None);
    }

    #[test]
    fn test_overrides_win() {
        let mut config = SearchBenchConfig::default();
        config.study.seed = Some(1);
        config.output.path = Some("from-config.csv".to_string());

        let overrides = PlanOverrides {
            sizes: vec![50, 5],
            cases: vec!["worst".to_string()],
            iterations: Some(3),
            seed: Some(9),
            format: Some("csv".to_string()),
            output: Some(PathBuf::from("cli.csv")),
            ..Default::default()
        };
        let study = resolve_study(&config, &overrides).unwrap();

        assert_eq!(study.plan.sizes(), &[5, 50]);
        assert_eq!(study.plan.cases(), &[TargetCase::Worst]);
        assert_eq!(study.plan.trial().iterations, 3);
        assert_eq!(study.seed, Some(9));
        assert_eq!(study.format, OutputFormat::Csv);
        assert_eq!(study.output, Some(PathBuf::from("cli.csv")));
    }

    #[test]
    fn test_config_values_used_without_overrides() {
        let mut config = SearchBenchConfig::default();
        config.study.seed = Some(1);
        config.runner.pin_cpu = Some(2);
        config.output.path = Some("from-config.csv".to_string());

        let study = resolve_study(&config, &PlanOverrides::default()).unwrap();
        assert_eq!(study.seed, Some(1));
        assert_eq!(study.pin_cpu, Some(2));
        assert_eq!(study.output, Some(PathBuf::from("from-config.csv")));
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let mut config = SearchBenchConfig::default();
        config.study.sizes.clear();
        assert!(resolve_study(&config, &PlanOverrides::default()).is_err());
    }

    #[test]
    fn test_empty_cases_rejected() {
        let mut config = SearchBenchConfig::default();
        config.study.cases.clear();
        assert!(resolve_study(&config, &PlanOverrides::default()).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = SearchBenchConfig::default();

        let zero_size = PlanOverrides {
            sizes: vec![0],
            ..Default::default()
        };
        assert!(resolve_study(&config, &zero_size).is_err());

        let zero_iterations = PlanOverrides {
            iterations: Some(0),
            ..Default::default()
        };
        let err = resolve_study(&config, &zero_iterations).unwrap_err();
        assert!(err.to_string().contains("iteration count"));

        let bad_case = PlanOverrides {
            cases: vec!["best".to_string()],
            ..Default::default()
        };
        assert!(resolve_study(&config, &bad_case).is_err());

        let bad_format = PlanOverrides {
            format: Some("html".to_string()),
            ..Default::default()
        };
        assert!(resolve_study(&config, &bad_format).is_err());
    }
}
