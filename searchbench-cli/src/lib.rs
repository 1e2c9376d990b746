#![warn(missing_docs)]
//! SearchBench CLI Library
//!
//! This module provides the command-line front end for search studies.
//! Use `searchbench::run()` (or `searchbench_cli::run()`) in a main function
//! to get the full CLI: `run` (default), `probe` and `init`.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     searchbench_cli::run()
//! }
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{
    ExecutionConfig, StudyExecutor, build_report, build_report_meta, build_series,
    format_human_output, format_probe_output,
};
pub use planner::{PlanOverrides, ResolvedStudy, resolve_study};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use searchbench_core::{Algorithm, SearchOutcome, Sequence};
use searchbench_report::{
    OutputFormat, Report, ReportConfig, generate_csv_report, generate_json_report,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// SearchBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "searchbench")]
#[command(
    author,
    version,
    about = "SearchBench - linear vs binary search on sorted integers"
)]
pub struct Cli {
    /// Optional subcommand (Run, Probe, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Study options when no subcommand is given
    #[command(flatten)]
    pub run: RunArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options of a study run
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Study configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Target cases, comma separated: average, worst
    #[arg(long, value_delimiter = ',')]
    pub cases: Vec<String>,

    /// Timed invocations per algorithm per (size, case)
    #[arg(long, short = 'n')]
    pub iterations: Option<usize>,

    /// Untimed invocations before each trial
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Seed for average-case targets (random if not specified)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pin the measuring thread to this CPU core (Linux only)
    #[arg(long)]
    pub pin_cpu: Option<usize>,
}

impl RunArgs {
    /// True when no study option was given
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Keep values set here, take the rest from `fallback`
    fn or(self, fallback: &RunArgs) -> RunArgs {
        RunArgs {
            config: self.config.or_else(|| fallback.config.clone()),
            sizes: non_empty_or(self.sizes, &fallback.sizes),
            cases: non_empty_or(self.cases, &fallback.cases),
            iterations: self.iterations.or(fallback.iterations),
            warmup: self.warmup.or(fallback.warmup),
            seed: self.seed.or(fallback.seed),
            format: self.format.or_else(|| fallback.format.clone()),
            output: self.output.or_else(|| fallback.output.clone()),
            pin_cpu: self.pin_cpu.or(fallback.pin_cpu),
        }
    }

    /// Command-line values that override the configuration file
    pub fn overrides(&self) -> PlanOverrides {
        PlanOverrides {
            sizes: self.sizes.clone(),
            cases: self.cases.clone(),
            iterations: self.iterations,
            warmup_iterations: self.warmup,
            seed: self.seed,
            format: self.format.clone(),
            output: self.output.clone(),
            pin_cpu: self.pin_cpu,
        }
    }
}

fn non_empty_or<T: Clone>(values: Vec<T>, fallback: &[T]) -> Vec<T> {
    if values.is_empty() {
        fallback.to_vec()
    } else {
        values
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the study (default)
    Run(RunArgs),
    /// Search one target once with each algorithm
    Probe {
        /// Sequence length
        #[arg(long, default_value = "10")]
        size: usize,
        /// Value to search for
        #[arg(long, default_value = "7", allow_negative_numbers = true)]
        target: i64,
    },
    /// Print a documented default configuration file
    Init,
}

impl Cli {
    /// Study options in effect; `run` options win over top-level ones
    pub fn run_args(&self) -> RunArgs {
        match &self.command {
            Some(Commands::Run(args)) => args.clone().or(&self.run),
            _ => self.run.clone(),
        }
    }

    /// Command-line values that override the configuration file
    pub fn overrides(&self) -> PlanOverrides {
        self.run_args().overrides()
    }
}

/// Run the SearchBench CLI with the given arguments.
/// This is the main entry point for the `searchbench` binary.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SearchBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging; stdout stays reserved for reports
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("searchbench=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("searchbench=info")
            .with_writer(std::io::stderr)
            .init();
    }

    let study_command = matches!(cli.command, Some(Commands::Run(_)) | None);
    if !study_command && !cli.run.is_empty() {
        warn!("study options are ignored by this subcommand");
    }

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", SearchBenchConfig::default_toml());
        }
        Some(Commands::Probe { size, target }) => {
            print!("{}", format_probe_output(size, target, &probe(size, target)));
        }
        Some(Commands::Run(_)) | None => {
            run_study_command(&cli)?;
        }
    }

    Ok(())
}

/// Search `target` once in `1..=size` with every algorithm
pub fn probe(size: usize, target: i64) -> Vec<(Algorithm, SearchOutcome)> {
    let sequence = Sequence::generate(size);
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            (
                algorithm,
                algorithm.searcher().search(sequence.as_slice(), target),
            )
        })
        .collect()
}

fn run_study_command(cli: &Cli) -> anyhow::Result<()> {
    let args = cli.run_args();
    let config = match &args.config {
        Some(path) => SearchBenchConfig::load(path)?,
        None => SearchBenchConfig::default(),
    };
    let study = resolve_study(&config, &args.overrides())?;

    let report = execute_study(&study)?;
    let output = render_report(&report, study.format)?;

    if let Some(ref path) = study.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Run a resolved study and build its report
///
/// A missing seed is drawn here and recorded in the report metadata, so
/// every report can be reproduced.
pub fn execute_study(study: &ResolvedStudy) -> anyhow::Result<Report> {
    let seed = study.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        sizes = ?study.plan.sizes(),
        iterations = study.plan.trial().iterations,
        "starting study"
    );

    let executor = StudyExecutor::new(ExecutionConfig {
        show_progress: study.format == OutputFormat::Human,
        pin_cpu: study.pin_cpu,
    });
    let pinned_cpu = executor.pin();

    let start_time = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let records = executor.execute(&study.plan, &mut rng)?;
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let config = ReportConfig {
        sizes: study.plan.sizes().to_vec(),
        cases: study.plan.cases().to_vec(),
        iterations: study.plan.trial().iterations,
        warmup_iterations: study.plan.trial().warmup_iterations,
        seed: Some(seed),
        pinned_cpu,
    };
    Ok(build_report(records, config, total_duration_ms))
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Human => format_human_output(report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use searchbench_core::TargetCase;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "searchbench",
            "--sizes",
            "10,100",
            "--cases",
            "worst",
            "-n",
            "5",
            "--seed",
            "42",
            "--format",
            "csv",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        let overrides = cli.overrides();
        assert_eq!(overrides.sizes, vec![10, 100]);
        assert_eq!(overrides.cases, vec!["worst"]);
        assert_eq!(overrides.iterations, Some(5));
        assert_eq!(overrides.seed, Some(42));
        assert_eq!(overrides.format.as_deref(), Some("csv"));
        assert_eq!(overrides.warmup_iterations, None);
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["searchbench", "run", "--sizes", "7", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run(_))));
        assert_eq!(cli.overrides().sizes, vec![7]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_run_flags_merge_with_top_level() {
        let cli = Cli::try_parse_from([
            "searchbench",
            "--seed",
            "3",
            "--sizes",
            "10",
            "run",
            "--sizes",
            "20,30",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.sizes, vec![20, 30]);
        assert_eq!(overrides.seed, Some(3));
    }

    #[test]
    fn test_study_flags_rejected_by_other_subcommands() {
        assert!(Cli::try_parse_from(["searchbench", "probe", "--format", "json"]).is_err());
        assert!(Cli::try_parse_from(["searchbench", "init", "-o", "x.toml"]).is_err());
        assert!(Cli::try_parse_from(["searchbench", "probe", "-v"]).is_ok());
    }

    #[test]
    fn test_top_level_flags_detected_before_subcommand() {
        let cli = Cli::try_parse_from(["searchbench", "--format", "json", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));
        assert!(!cli.run.is_empty());

        let cli = Cli::try_parse_from(["searchbench", "init"]).unwrap();
        assert!(cli.run.is_empty());
    }

    #[test]
    fn test_parse_probe() {
        let cli = Cli::try_parse_from(["searchbench", "probe"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Probe { size: 10, target: 7 })
        ));

        let cli =
            Cli::try_parse_from(["searchbench", "probe", "--size", "3", "--target", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Probe { size: 3, target: -1 })
        ));
    }

    #[test]
    fn test_probe_reference_cases() {
        let present = probe(10, 7);
        assert_eq!(present[0], (Algorithm::Linear, SearchOutcome::found(6, 7)));
        assert_eq!(present[1], (Algorithm::Binary, SearchOutcome::found(6, 4)));

        let absent = probe(10, 15);
        assert_eq!(absent[0], (Algorithm::Linear, SearchOutcome::not_found(10)));
        assert_eq!(absent[1], (Algorithm::Binary, SearchOutcome::not_found(4)));
    }

    #[test]
    fn test_execute_study_records_seed() {
        let overrides = PlanOverrides {
            sizes: vec![10, 100],
            iterations: Some(2),
            format: Some("json".to_string()),
            ..Default::default()
        };
        let study = resolve_study(&SearchBenchConfig::default(), &overrides).unwrap();
        let report = execute_study(&study).unwrap();

        assert!(report.meta.config.seed.is_some());
        assert_eq!(report.records.len(), 4);
        assert_eq!(report.meta.config.cases, TargetCase::ALL.to_vec());
    }

    #[test]
    fn test_fixed_seed_reproduces_targets() {
        let overrides = PlanOverrides {
            sizes: vec![1_000],
            cases: vec!["average".to_string()],
            iterations: Some(1),
            seed: Some(99),
            ..Default::default()
        };
        let study = resolve_study(&SearchBenchConfig::default(), &overrides).unwrap();
        let first = execute_study(&study).unwrap();
        let second = execute_study(&study).unwrap();

        assert_eq!(first.records[0].target, second.records[0].target);
        assert_eq!(first.meta.config.seed, Some(99));
    }

    #[test]
    fn test_render_formats() {
        let overrides = PlanOverrides {
            sizes: vec![10],
            iterations: Some(1),
            seed: Some(1),
            ..Default::default()
        };
        let study = resolve_study(&SearchBenchConfig::default(), &overrides).unwrap();
        let report = execute_study(&study).unwrap();

        let csv = render_report(&report, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 3);
        let json = render_report(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"schema_version\""));
        let human = render_report(&report, OutputFormat::Human).unwrap();
        assert!(human.contains("SearchBench Results"));
    }
}
