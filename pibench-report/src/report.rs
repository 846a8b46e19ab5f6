//! Report Data Structures

use chrono::{DateTime, Utc};
use pibench_stats::compute_summary;
use serde::{Deserialize, Serialize};

/// Configuration key of the sequential baseline.
pub const SEQUENTIAL_KEY: &str = "sequential";

/// Configuration key for a parallel run at the given worker count.
pub fn parallel_key(worker_count: usize) -> String {
    format!("parallel_{worker_count}")
}

/// Complete result set of one benchmark run.
///
/// Configurations are stored in execution order with the sequential baseline
/// first; the set is read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Run metadata: when, on what machine, with which settings.
    pub meta: ReportMeta,
    /// Per-configuration summaries, sequential first.
    pub configurations: Vec<BenchmarkSummary>,
}

impl BenchmarkReport {
    /// Look up a configuration summary by key (e.g. `"parallel_4"`).
    pub fn get(&self, key: &str) -> Option<&BenchmarkSummary> {
        self.configurations.iter().find(|c| c.key == key)
    }

    /// The sequential baseline summary.
    pub fn sequential(&self) -> Option<&BenchmarkSummary> {
        self.get(SEQUENTIAL_KEY)
    }

    /// Configuration keys in execution order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.configurations.iter().map(|c| c.key.as_str())
    }
}

/// Aggregated statistics for one configuration across all repetitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    /// Stable configuration key (`sequential`, `parallel_2`, ...).
    pub key: String,
    /// Human-readable configuration label.
    pub label: String,
    /// Workers used by this configuration (1 for sequential).
    pub worker_count: usize,
    /// Elapsed seconds per repetition, in repetition order.
    pub elapsed_samples: Vec<f64>,
    /// Mean elapsed time in seconds.
    pub mean_time: f64,
    /// Sample standard deviation of the elapsed times (0.0 for one repetition).
    pub std_dev_time: f64,
    /// Fastest repetition.
    pub min_time: f64,
    /// Slowest repetition.
    pub max_time: f64,
    /// Mean Pi estimate across repetitions.
    pub mean_pi: f64,
    /// Absolute error of `mean_pi` against Pi.
    pub pi_error: f64,
    /// Speedup vs the sequential baseline (1.0 for the baseline itself).
    pub speedup: f64,
}

impl BenchmarkSummary {
    /// Build a summary from per-repetition measurements.
    ///
    /// `speedup` starts at 1.0; the benchmark runner overwrites it for
    /// parallel configurations once the sequential baseline exists.
    pub fn from_repetitions(
        key: impl Into<String>,
        label: impl Into<String>,
        worker_count: usize,
        elapsed_samples: Vec<f64>,
        pi_values: &[f64],
    ) -> Self {
        let stats = compute_summary(&elapsed_samples);
        let mean_pi = if pi_values.is_empty() {
            0.0
        } else {
            pi_values.iter().sum::<f64>() / pi_values.len() as f64
        };

        Self {
            key: key.into(),
            label: label.into(),
            worker_count,
            elapsed_samples,
            mean_time: stats.mean,
            std_dev_time: stats.std_dev,
            min_time: stats.min,
            max_time: stats.max,
            mean_pi,
            pi_error: (mean_pi - std::f64::consts::PI).abs(),
            speedup: 1.0,
        }
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Crate version that produced the report.
    pub version: String,
    /// UTC time of report generation.
    pub timestamp: DateTime<Utc>,
    /// Host system description.
    pub system: SystemInfo,
    /// Run settings.
    pub config: ReportConfig,
}

/// Run settings captured in report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Random samples per estimation.
    pub sample_count: u64,
    /// Repetitions per configuration.
    pub repetition_count: usize,
    /// Per-worker timeout in seconds for parallel runs.
    pub worker_timeout_secs: u64,
}

/// System information, collected once at benchmark start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name.
    pub os: String,
    /// Target architecture.
    pub arch: String,
    /// Available parallel execution units.
    pub cpu_cores: u32,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_parallel_key() {
        assert_eq!(parallel_key(2), "parallel_2");
        assert_eq!(parallel_key(8), "parallel_8");
    }

    #[test]
    fn test_summary_from_repetitions() {
        let summary = BenchmarkSummary::from_repetitions(
            "sequential",
            "sequential",
            1,
            vec![0.10, 0.12, 0.11],
            &[3.14, 3.15, 3.13],
        );

        assert_eq!(summary.elapsed_samples.len(), 3);
        assert!((summary.mean_time - 0.11).abs() < 1e-12);
        assert_eq!(summary.min_time, 0.10);
        assert_eq!(summary.max_time, 0.12);
        assert!((summary.mean_pi - 3.14).abs() < 1e-12);
        assert!((summary.pi_error - (3.14 - PI).abs()).abs() < 1e-12);
        // Default until the runner fills it in.
        assert!((summary.speedup - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_repetition_zero_stddev() {
        let summary =
            BenchmarkSummary::from_repetitions("parallel_2", "parallel", 2, vec![0.2], &[3.1]);
        assert!((summary.std_dev_time - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_lookup() {
        let report = BenchmarkReport {
            meta: test_meta(),
            configurations: vec![
                BenchmarkSummary::from_repetitions("sequential", "sequential", 1, vec![0.1], &[3.1]),
                BenchmarkSummary::from_repetitions("parallel_2", "parallel", 2, vec![0.05], &[3.2]),
            ],
        };

        assert!(report.sequential().is_some());
        assert_eq!(report.get("parallel_2").unwrap().worker_count, 2);
        assert!(report.get("parallel_16").is_none());
        let keys: Vec<_> = report.keys().collect();
        assert_eq!(keys, vec!["sequential", "parallel_2"]);
    }

    pub(crate) fn test_meta() -> ReportMeta {
        ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            system: SystemInfo {
                os: "linux".to_string(),
                arch: "x86_64".to_string(),
                cpu_cores: 8,
            },
            config: ReportConfig {
                sample_count: 100_000,
                repetition_count: 3,
                worker_timeout_secs: 60,
            },
        }
    }
}
