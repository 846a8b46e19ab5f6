//! Sequential Estimator
//!
//! Runs the full sample budget on the calling thread. The timing window
//! covers the sampling loop only.

use crate::measure::Timer;
use crate::sampler::{Sampler, UniformSampler, count_inside};
use crate::{EstimateError, SimulationResult};

/// Estimate Pi by drawing `sample_count` random points sequentially.
///
/// Returns `InvalidArgument` when `sample_count` is zero. The estimate lies
/// in [0, 4] and converges toward Pi with statistical error on the order of
/// `1/sqrt(sample_count)`.
pub fn estimate_pi_sequential(sample_count: u64) -> Result<SimulationResult, EstimateError> {
    estimate_with_sampler(UniformSampler::from_entropy(), sample_count)
}

pub(crate) fn estimate_with_sampler<S: Sampler>(
    mut sampler: S,
    sample_count: u64,
) -> Result<SimulationResult, EstimateError> {
    if sample_count == 0 {
        return Err(EstimateError::InvalidArgument {
            name: "sample_count",
            value: 0,
        });
    }

    let timer = Timer::start();
    let inside = count_inside(&mut sampler, sample_count);
    let elapsed_seconds = timer.stop_secs();

    Ok(SimulationResult {
        pi_estimate: 4.0 * inside as f64 / sample_count as f64,
        elapsed_seconds,
        sample_count,
        worker_count: 1,
    })
}
