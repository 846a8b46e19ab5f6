//! Speedup Computation

/// Speedup of a configuration relative to the sequential baseline.
///
/// `baseline_mean / candidate_mean`; values above 1.0 indicate parallel
/// benefit. A zero-duration candidate yields 0.0 rather than a division by
/// zero.
pub fn compute_speedup(baseline_mean: f64, candidate_mean: f64) -> f64 {
    if candidate_mean == 0.0 {
        0.0
    } else {
        baseline_mean / candidate_mean
    }
}
