//! Parallel Estimator
//!
//! Partitions the sample budget across OS threads. Each worker draws and
//! tests its chunk with a thread-local sampler and a local counter, then
//! reports the count once over a channel. The merge is a post-join summation
//! of those per-worker results; commutative addition makes the total
//! independent of completion order.
//!
//! Waiting for the workers is a bounded operation: if any worker fails to
//! report within the configured timeout, the whole estimation call fails
//! with `WorkerTimeout` instead of hanging.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::measure::Timer;
use crate::sampler::{Sampler, UniformSampler, count_inside};
use crate::{DEFAULT_WORKER_TIMEOUT, EstimateError, SimulationResult};

/// Tunables for a parallel estimation call.
#[derive(Debug, Clone)]
pub struct ParallelOptions {
    /// Ceiling on how long to wait for the workers to finish. Raise this for
    /// very large sample budgets; expiry is treated as a possible deadlock.
    pub worker_timeout: Duration,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            worker_timeout: DEFAULT_WORKER_TIMEOUT,
        }
    }
}

/// Split `sample_count` into `worker_count` near-equal chunks.
///
/// The first `worker_count - 1` chunks get `sample_count / worker_count`
/// samples each; the last chunk also absorbs the division remainder, so the
/// chunk sizes always sum to exactly `sample_count`.
///
/// # Panics
/// Panics if `worker_count` is zero; callers validate first.
pub fn partition_samples(sample_count: u64, worker_count: usize) -> Vec<u64> {
    assert!(worker_count > 0, "worker_count must be > 0");
    let base = sample_count / worker_count as u64;
    let mut chunks = vec![base; worker_count];
    chunks[worker_count - 1] = base + sample_count % worker_count as u64;
    chunks
}

/// Estimate Pi with `worker_count` concurrent workers and default options.
pub fn estimate_pi_parallel(
    sample_count: u64,
    worker_count: usize,
) -> Result<SimulationResult, EstimateError> {
    estimate_pi_parallel_with(sample_count, worker_count, &ParallelOptions::default())
}

/// Estimate Pi with `worker_count` concurrent workers.
///
/// Returns `InvalidArgument` when either count is zero, and `WorkerTimeout`
/// when a worker fails to report within `options.worker_timeout`. Worker
/// counts beyond the available parallelism are allowed; oversubscription is
/// logged as a warning, not an error.
pub fn estimate_pi_parallel_with(
    sample_count: u64,
    worker_count: usize,
    options: &ParallelOptions,
) -> Result<SimulationResult, EstimateError> {
    if sample_count == 0 {
        return Err(EstimateError::InvalidArgument {
            name: "sample_count",
            value: 0,
        });
    }
    if worker_count == 0 {
        return Err(EstimateError::InvalidArgument {
            name: "worker_count",
            value: 0,
        });
    }

    if let Ok(available) = thread::available_parallelism() {
        if worker_count > available.get() {
            tracing::warn!(
                requested = worker_count,
                available = available.get(),
                "worker count exceeds available parallelism; oversubscribing"
            );
        }
    }

    let timer = Timer::start();
    let chunks = partition_samples(sample_count, worker_count);
    let total_inside = collect_worker_counts(&chunks, options.worker_timeout, |_| {
        UniformSampler::from_entropy()
    })?;
    let elapsed_seconds = timer.stop_secs();

    Ok(SimulationResult {
        pi_estimate: 4.0 * total_inside as f64 / sample_count as f64,
        elapsed_seconds,
        sample_count,
        worker_count,
    })
}

/// Spawn one thread per chunk and sum the per-worker inside-counts.
///
/// `make_sampler` is called once per worker on the calling thread; the
/// sampler is then moved into the worker, so the sampling loop touches no
/// shared state. The single `send` per worker is the merge step.
fn collect_worker_counts<S, F>(
    chunks: &[u64],
    timeout: Duration,
    mut make_sampler: F,
) -> Result<u64, EstimateError>
where
    S: Sampler + Send + 'static,
    F: FnMut(usize) -> S,
{
    let (tx, rx) = mpsc::channel::<(usize, u64)>();
    let mut handles = Vec::with_capacity(chunks.len());

    for (worker, &chunk) in chunks.iter().enumerate() {
        let tx = tx.clone();
        let mut sampler = make_sampler(worker);
        handles.push(thread::spawn(move || {
            let local_inside = count_inside(&mut sampler, chunk);
            let _ = tx.send((worker, local_inside));
        }));
    }
    drop(tx);

    let deadline = Instant::now() + timeout;
    let mut reported = vec![false; chunks.len()];
    let mut total_inside = 0u64;

    for _ in 0..chunks.len() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((worker, local_inside)) => {
                reported[worker] = true;
                total_inside += local_inside;
            }
            // A disconnect means a worker died without reporting; treat it
            // the same as a hang. The missing workers are left detached.
            Err(_) => {
                let worker = reported.iter().position(|&r| !r).unwrap_or(0);
                return Err(EstimateError::WorkerTimeout { worker, timeout });
            }
        }
    }

    // Every worker has reported, so the joins return promptly.
    for handle in handles {
        let _ = handle.join();
    }

    Ok(total_inside)
}
