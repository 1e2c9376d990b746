//! Configuration loading from a study TOML file
//!
//! A configuration file is only read when passed explicitly with `--config`;
//! nothing is discovered implicitly and nothing is written back. Every field
//! has a default so partial files parse.

use searchbench_core::DEFAULT_SIZES;
use searchbench_stats::DEFAULT_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// SearchBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchBenchConfig {
    /// What to measure
    #[serde(default)]
    pub study: StudyConfig,
    /// How to measure it
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Where the report goes
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sizes, cases and repetition counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Input sizes
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Target case labels: "average", "worst"
    #[serde(default = "default_cases")]
    pub cases: Vec<String>,
    /// Timed invocations per trial
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Untimed invocations before each trial
    #[serde(default)]
    pub warmup_iterations: usize,
    /// Seed for average-case targets (random if absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            cases: default_cases(),
            iterations: default_iterations(),
            warmup_iterations: 0,
            seed: None,
        }
    }
}

fn default_sizes() -> Vec<usize> {
    DEFAULT_SIZES.to_vec()
}
fn default_cases() -> Vec<String> {
    vec!["average".to_string(), "worst".to_string()]
}
fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    /// Pin the measuring thread to this core (Linux only)
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Output file (stdout if absent)
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl SearchBenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SearchBench Configuration

[study]
# Input sizes; each produces the sequence 1..=size
sizes = [1000, 10000, 100000]
# Target cases: "average" (random present value) and/or "worst" (size + 1, absent)
cases = ["average", "worst"]
# Timed invocations per algorithm per (size, case)
iterations = 100
# Untimed invocations before each trial
warmup_iterations = 0
# Fixed seed for average-case targets (uncomment to enable)
# seed = 42

[runner]
# Pin the measuring thread to one core, Linux only (uncomment to enable)
# pin_cpu = 0

[output]
# Output format: human, json, csv
format = "human"
# Output file, stdout if unset (uncomment to enable)
# path = "target/searchbench/study.csv"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchBenchConfig::default();
        assert_eq!(config.study.sizes, vec![1_000, 10_000, 100_000]);
        assert_eq!(config.study.cases, vec!["average", "worst"]);
        assert_eq!(config.study.iterations, 100);
        assert_eq!(config.study.seed, None);
        assert_eq!(config.output.format, "human");
        assert_eq!(config.runner.pin_cpu, None);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [study]
            sizes = [10, 20]
            seed = 7

            [output]
            format = "csv"
        "#;

        let config: SearchBenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.study.sizes, vec![10, 20]);
        assert_eq!(config.study.seed, Some(7));
        assert_eq!(config.output.format, "csv");
        // Defaults should still apply
        assert_eq!(config.study.iterations, 100);
        assert_eq!(config.study.cases.len(), 2);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SearchBenchConfig =
            toml::from_str(&SearchBenchConfig::default_toml()).unwrap();
        assert_eq!(config.study.sizes, vec![1_000, 10_000, 100_000]);
        assert_eq!(config.study.warmup_iterations, 0);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SearchBenchConfig::load("/nonexistent/searchbench.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
