//! System Metadata Collection
//!
//! Collects the report metadata once at benchmark start: OS, architecture
//! and the available parallel-execution-unit count.

use chrono::Utc;
use pibench_report::{ReportConfig, ReportMeta, SystemInfo};

use crate::runner::BenchmarkPlan;

/// Build report metadata for a benchmark plan.
pub fn build_report_meta(plan: &BenchmarkPlan) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            sample_count: plan.sample_count,
            repetition_count: plan.repetitions,
            worker_timeout_secs: plan.options.worker_timeout.as_secs(),
        },
    }
}

/// Get number of available CPU cores
pub fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
