#![warn(missing_docs)]
//! PiBench Core - Estimator Runtime
//!
//! This crate provides the estimation engines for the Pi benchmark:
//! - `Sampler` trait and the production `UniformSampler`
//! - Sequential estimator running the full sample budget on one thread
//! - Parallel estimator partitioning the budget across OS threads with a
//!   bounded wait on the merge step
//! - Wall-clock timing via `Timer`

mod error;
mod measure;
mod parallel;
mod sampler;
mod sequential;

pub use error::EstimateError;
pub use measure::Timer;
pub use parallel::{
    ParallelOptions, estimate_pi_parallel, estimate_pi_parallel_with, partition_samples,
};
pub use sampler::{Sampler, UniformSampler};
pub use sequential::estimate_pi_sequential;

use std::time::Duration;

/// Default ceiling on how long the parallel estimator waits for its workers.
///
/// Large sample budgets can legitimately exceed this; callers should raise it
/// through [`ParallelOptions`] rather than treat it as a fixed constant.
pub const DEFAULT_WORKER_TIMEOUT: Duration = Duration::from_secs(60);

/// Result of a single estimator invocation.
///
/// Constructed once per run and immutable afterwards; owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Estimated value of Pi: `4.0 * inside_count / sample_count`.
    pub pi_estimate: f64,
    /// Wall-clock time spent in the sampling phase, in seconds.
    pub elapsed_seconds: f64,
    /// Number of random points drawn.
    pub sample_count: u64,
    /// Number of workers that produced the estimate (1 for sequential).
    pub worker_count: usize,
}
