#![warn(missing_docs)]
//! # PiBench
//!
//! Estimates Pi via Monte Carlo sampling and benchmarks sequential versus
//! parallel execution, reporting timing statistics and speedup.
//!
//! - **Sequential estimator**: the full sample budget on one thread
//! - **Parallel estimator**: the budget partitioned across OS threads, with
//!   per-worker local counting and a single merge step, bounded by a
//!   configurable worker timeout
//! - **Benchmark runner**: repeats both estimators across configurations
//!   (sequential, parallel at 2/4/8 workers by default) and aggregates
//!   mean/stddev/min/max timings plus speedup vs the sequential baseline
//! - **Report**: serializable result set with human-table and JSON output
//!
//! ## Quick Start
//!
//! ```no_run
//! use pibench::prelude::*;
//!
//! let report = run_benchmark(1_000_000, 5)?;
//! println!("{}", format_human_output(&report));
//! # Ok::<(), pibench::RunnerError>(())
//! ```

// Re-export core types
pub use pibench_core::{
    DEFAULT_WORKER_TIMEOUT, EstimateError, ParallelOptions, Sampler, SimulationResult, Timer,
    UniformSampler, estimate_pi_parallel, estimate_pi_parallel_with, estimate_pi_sequential,
    partition_samples,
};

// Re-export stats
pub use pibench_stats::{SummaryStatistics, compute_speedup, compute_summary};

// Re-export report types
pub use pibench_report::{
    BenchmarkReport, BenchmarkSummary, OutputFormat, ReportConfig, ReportMeta, SEQUENTIAL_KEY,
    SystemInfo, format_human_output, generate_json_report, parallel_key,
};

// Re-export the runner and CLI entry point
pub use pibench_cli::{
    BenchmarkPlan, DEFAULT_REPETITIONS, DEFAULT_WORKER_COUNTS, RunnerError, run, run_benchmark,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkPlan, BenchmarkReport, EstimateError, RunnerError, SimulationResult,
        estimate_pi_parallel, estimate_pi_sequential, format_human_output, generate_json_report,
        run_benchmark,
    };
}
