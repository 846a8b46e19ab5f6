#![warn(missing_docs)]
//! PiBench CLI Library
//!
//! Command-line front end for the Pi benchmark: argument parsing,
//! `pibench.toml` discovery, benchmark execution and output rendering.
//! The `pibench` binary is a thin wrapper over [`run`].

mod config;
mod metadata;
mod runner;

pub use config::{OutputConfig, PibenchConfig, RunnerConfig};
pub use metadata::{build_report_meta, num_cpus};
pub use runner::{
    BenchmarkPlan, DEFAULT_REPETITIONS, DEFAULT_WORKER_COUNTS, RunnerError, run_benchmark,
};

use clap::Parser;
use pibench_report::{OutputFormat, format_human_output, generate_json_report};
use std::path::PathBuf;
use std::time::Duration;

/// PiBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "pibench")]
#[command(author, version, about = "Monte Carlo Pi estimation benchmark")]
pub struct Cli {
    /// Random samples per estimation
    #[arg(long, short = 'n')]
    pub samples: Option<u64>,

    /// Repetitions per configuration
    #[arg(long, short = 'r')]
    pub repetitions: Option<usize>,

    /// Comma-separated worker counts for the parallel configurations
    #[arg(long, value_delimiter = ',')]
    pub workers: Option<Vec<usize>>,

    /// Per-worker timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the PiBench CLI.
///
/// This is the main entry point for the `pibench` binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the PiBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pibench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pibench=info")
            .init();
    }

    // Discover pibench.toml configuration (CLI flags override)
    let config = PibenchConfig::discover().unwrap_or_default();
    let plan = build_plan(&cli, &config);

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let report = plan.run()?;

    let rendered = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Merge CLI flags over file configuration into an executable plan.
fn build_plan(cli: &Cli, config: &PibenchConfig) -> BenchmarkPlan {
    let sample_count = cli.samples.unwrap_or(config.runner.samples);
    let repetitions = cli.repetitions.unwrap_or(config.runner.repetitions);
    let worker_counts = cli
        .workers
        .clone()
        .unwrap_or_else(|| config.runner.workers.clone());
    let timeout_secs = cli.timeout.unwrap_or(config.runner.worker_timeout_secs);

    BenchmarkPlan::new(sample_count, repetitions)
        .with_worker_counts(worker_counts)
        .with_worker_timeout(Duration::from_secs(timeout_secs))
}
