//! Benchmark Runner
//!
//! Runs the sequential estimator and the parallel estimator at several
//! worker counts, repeating each configuration and aggregating timing
//! statistics. Configurations and repetitions execute strictly in order;
//! the sequential baseline is computed first because parallel speedups
//! divide by its mean. A single failed repetition aborts the whole run.

use pibench_core::{
    EstimateError, ParallelOptions, SimulationResult, estimate_pi_parallel_with,
    estimate_pi_sequential,
};
use pibench_report::{
    BenchmarkReport, BenchmarkSummary, SEQUENTIAL_KEY, parallel_key,
};
use pibench_stats::compute_speedup;
use std::time::Duration;
use thiserror::Error;

use crate::metadata::build_report_meta;

/// Worker counts exercised after the sequential baseline.
pub const DEFAULT_WORKER_COUNTS: &[usize] = &[2, 4, 8];

/// Default repetitions per configuration.
pub const DEFAULT_REPETITIONS: usize = 5;

/// Errors produced by the benchmark runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Input rejected before any estimator ran.
    #[error(transparent)]
    Invalid(#[from] EstimateError),

    /// An estimator failed mid-run. The underlying error is preserved
    /// unchanged; this only records where the run aborted.
    #[error("{config}, repetition {repetition}/{total}: {source}")]
    Estimation {
        /// Configuration key that failed.
        config: String,
        /// 1-based repetition index at which the failure occurred.
        repetition: usize,
        /// Total repetitions planned for the configuration.
        total: usize,
        /// The estimator error, unwrapped and unmasked.
        #[source]
        source: EstimateError,
    },
}

/// One full benchmark run: sample budget, repetitions, and the parallel
/// configurations to test.
#[derive(Debug, Clone)]
pub struct BenchmarkPlan {
    /// Random samples per estimation.
    pub sample_count: u64,
    /// Repetitions per configuration.
    pub repetitions: usize,
    /// Worker counts for the parallel configurations, in run order.
    pub worker_counts: Vec<usize>,
    /// Options forwarded to the parallel estimator.
    pub options: ParallelOptions,
}

impl BenchmarkPlan {
    /// Plan with the default configurations (sequential, then parallel at
    /// 2, 4 and 8 workers) and the default worker timeout.
    pub fn new(sample_count: u64, repetitions: usize) -> Self {
        Self {
            sample_count,
            repetitions,
            worker_counts: DEFAULT_WORKER_COUNTS.to_vec(),
            options: ParallelOptions::default(),
        }
    }

    /// Override the per-worker timeout.
    pub fn with_worker_timeout(mut self, timeout: Duration) -> Self {
        self.options.worker_timeout = timeout;
        self
    }

    /// Override the parallel worker counts.
    pub fn with_worker_counts(mut self, worker_counts: Vec<usize>) -> Self {
        self.worker_counts = worker_counts;
        self
    }

    /// Execute the plan and return the aggregated result set.
    ///
    /// No partial result set is returned on failure: the first estimator
    /// error aborts the run and reports the configuration and repetition at
    /// which it occurred.
    pub fn run(&self) -> Result<BenchmarkReport, RunnerError> {
        if self.sample_count == 0 {
            return Err(EstimateError::InvalidArgument {
                name: "sample_count",
                value: 0,
            }
            .into());
        }
        if self.repetitions == 0 {
            return Err(EstimateError::InvalidArgument {
                name: "repetition_count",
                value: 0,
            }
            .into());
        }

        let meta = build_report_meta(self);
        tracing::info!(
            samples = self.sample_count,
            repetitions = self.repetitions,
            cores = meta.system.cpu_cores,
            "starting benchmark"
        );

        let mut configurations = Vec::with_capacity(1 + self.worker_counts.len());

        let sequential = self.run_configuration(SEQUENTIAL_KEY, "sequential", 1, |_| {
            estimate_pi_sequential(self.sample_count)
        })?;
        let baseline_mean = sequential.mean_time;
        configurations.push(sequential);

        for &workers in &self.worker_counts {
            let key = parallel_key(workers);
            let label = format!("parallel ({workers} workers)");
            let mut summary = self.run_configuration(&key, &label, workers, |_| {
                estimate_pi_parallel_with(self.sample_count, workers, &self.options)
            })?;
            summary.speedup = compute_speedup(baseline_mean, summary.mean_time);
            configurations.push(summary);
        }

        Ok(BenchmarkReport {
            meta,
            configurations,
        })
    }

    fn run_configuration<F>(
        &self,
        key: &str,
        label: &str,
        worker_count: usize,
        mut estimate: F,
    ) -> Result<BenchmarkSummary, RunnerError>
    where
        F: FnMut(usize) -> Result<SimulationResult, EstimateError>,
    {
        let mut times = Vec::with_capacity(self.repetitions);
        let mut pi_values = Vec::with_capacity(self.repetitions);

        for repetition in 0..self.repetitions {
            let result = estimate(repetition).map_err(|source| RunnerError::Estimation {
                config: key.to_string(),
                repetition: repetition + 1,
                total: self.repetitions,
                source,
            })?;
            tracing::debug!(
                config = key,
                repetition = repetition + 1,
                elapsed = result.elapsed_seconds,
                pi = result.pi_estimate,
                "repetition finished"
            );
            times.push(result.elapsed_seconds);
            pi_values.push(result.pi_estimate);
        }

        let summary =
            BenchmarkSummary::from_repetitions(key, label, worker_count, times, &pi_values);
        tracing::info!(
            config = key,
            mean = summary.mean_time,
            std_dev = summary.std_dev_time,
            "configuration finished"
        );
        Ok(summary)
    }
}

/// Run the full benchmark with default configurations.
///
/// Convenience wrapper over [`BenchmarkPlan`] for the common case.
pub fn run_benchmark(
    sample_count: u64,
    repetition_count: usize,
) -> Result<BenchmarkReport, RunnerError> {
    BenchmarkPlan::new(sample_count, repetition_count).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_plan(repetitions: usize) -> BenchmarkPlan {
        BenchmarkPlan::new(20_000, repetitions).with_worker_counts(vec![2])
    }

    #[test]
    fn test_rejects_zero_samples() {
        let err = run_benchmark(0, 3).unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Invalid(EstimateError::InvalidArgument {
                name: "sample_count",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_repetitions() {
        let err = run_benchmark(1_000, 0).unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Invalid(EstimateError::InvalidArgument {
                name: "repetition_count",
                ..
            })
        ));
    }

    #[test]
    fn test_sequential_is_first_with_unit_speedup() {
        let report = quick_plan(2).run().unwrap();
        let keys: Vec<_> = report.keys().collect();
        assert_eq!(keys, vec!["sequential", "parallel_2"]);

        let sequential = report.sequential().unwrap();
        assert!((sequential.speedup - 1.0).abs() < f64::EPSILON);
        assert_eq!(sequential.worker_count, 1);

        let parallel = report.get("parallel_2").unwrap();
        assert!(parallel.speedup >= 0.0);
        assert_eq!(parallel.worker_count, 2);
    }

    #[test]
    fn test_single_repetition_zero_stddev_everywhere() {
        let report = quick_plan(1).run().unwrap();
        for summary in &report.configurations {
            assert_eq!(summary.elapsed_samples.len(), 1);
            assert!((summary.std_dev_time - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_elapsed_samples_match_repetitions() {
        let report = quick_plan(3).run().unwrap();
        for summary in &report.configurations {
            assert_eq!(summary.elapsed_samples.len(), 3);
        }
    }

    #[test]
    fn test_timeout_aborts_with_location() {
        // A sub-nanosecond ceiling cannot be met, so the first parallel
        // repetition must abort the run with the estimator error preserved.
        let plan = BenchmarkPlan::new(5_000_000, 1)
            .with_worker_counts(vec![2])
            .with_worker_timeout(Duration::from_nanos(1));
        let err = plan.run().unwrap_err();

        match err {
            RunnerError::Estimation {
                config,
                repetition,
                source: EstimateError::WorkerTimeout { .. },
                ..
            } => {
                assert_eq!(config, "parallel_2");
                assert_eq!(repetition, 1);
            }
            other => panic!("expected timeout estimation error, got {other:?}"),
        }
    }
}
