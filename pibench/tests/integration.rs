//! Integration tests for PiBench
//!
//! These tests verify the end-to-end behavior of the benchmark pipeline,
//! from the estimators through the runner to the rendered report.

use pibench::{
    BenchmarkPlan, BenchmarkReport, EstimateError, RunnerError, estimate_pi_parallel,
    estimate_pi_sequential, format_human_output, generate_json_report, partition_samples,
    run_benchmark,
};
use std::f64::consts::PI;

/// Estimates are ratio-bounded regardless of sample count.
#[test]
fn test_sequential_estimate_within_ratio_bounds() {
    for n in [1, 10, 1_000, 50_000] {
        let result = estimate_pi_sequential(n).unwrap();
        assert!(
            result.pi_estimate >= 0.0 && result.pi_estimate <= 4.0,
            "n={n}: estimate {} out of [0, 4]",
            result.pi_estimate
        );
    }
}

/// Boundary inputs are rejected with InvalidArgument and no work done.
#[test]
fn test_boundary_arguments_rejected() {
    assert!(matches!(
        estimate_pi_sequential(0),
        Err(EstimateError::InvalidArgument { .. })
    ));
    assert!(matches!(
        estimate_pi_parallel(100, 0),
        Err(EstimateError::InvalidArgument { .. })
    ));
    assert!(matches!(
        estimate_pi_parallel(0, 4),
        Err(EstimateError::InvalidArgument { .. })
    ));
}

/// No sample is lost or duplicated by the partitioning.
#[test]
fn test_partitioning_preserves_sample_budget() {
    for workers in 1..=16 {
        let chunks = partition_samples(1_000_003, workers);
        assert_eq!(chunks.iter().sum::<u64>(), 1_000_003);
        assert_eq!(chunks.len(), workers);
    }
}

/// Single-worker parallel estimation is statistically equivalent to
/// sequential: same formula, same bounds, same convergence.
#[test]
fn test_parallel_single_worker_equivalence() {
    let sequential = estimate_pi_sequential(200_000).unwrap();
    let parallel = estimate_pi_parallel(200_000, 1).unwrap();

    assert_eq!(parallel.sample_count, sequential.sample_count);
    assert!((sequential.pi_estimate - PI).abs() < 0.05);
    assert!((parallel.pi_estimate - PI).abs() < 0.05);
}

/// End-to-end scenario: full benchmark run with the default configurations.
#[test]
fn test_full_benchmark_run() {
    let report = run_benchmark(100_000, 3).unwrap();

    let keys: Vec<_> = report.keys().collect();
    assert_eq!(
        keys,
        vec!["sequential", "parallel_2", "parallel_4", "parallel_8"]
    );

    for summary in &report.configurations {
        assert_eq!(summary.elapsed_samples.len(), 3);
        assert!(
            (summary.mean_pi - PI).abs() < 0.05,
            "{}: mean_pi {} too far from pi",
            summary.key,
            summary.mean_pi
        );
        assert!(summary.speedup >= 0.0);
        assert!(summary.min_time <= summary.mean_time);
        assert!(summary.mean_time <= summary.max_time);
    }

    let sequential = report.sequential().unwrap();
    assert!((sequential.speedup - 1.0).abs() < f64::EPSILON);
}

/// A single repetition yields zero stddev for every configuration.
#[test]
fn test_single_repetition_stddev() {
    let report = BenchmarkPlan::new(10_000, 1)
        .with_worker_counts(vec![2, 4])
        .run()
        .unwrap();

    for summary in &report.configurations {
        assert!((summary.std_dev_time - 0.0).abs() < f64::EPSILON);
    }
}

/// Runner rejections carry the estimator's InvalidArgument unchanged.
#[test]
fn test_runner_propagates_invalid_argument() {
    let err = run_benchmark(0, 3).unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Invalid(EstimateError::InvalidArgument { .. })
    ));
}

/// The rendered outputs agree with the in-memory result set.
#[test]
fn test_report_outputs() {
    let report = BenchmarkPlan::new(20_000, 2)
        .with_worker_counts(vec![2])
        .run()
        .unwrap();

    let table = format_human_output(&report);
    assert!(table.contains("sequential"));
    assert!(table.contains("parallel (2 workers)"));

    let json = generate_json_report(&report).unwrap();
    let parsed: BenchmarkReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.configurations.len(), 2);
    assert_eq!(parsed.meta.config.sample_count, 20_000);
    assert_eq!(parsed.meta.config.repetition_count, 2);
}
