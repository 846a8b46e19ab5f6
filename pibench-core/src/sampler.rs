//! Random Point Sampling
//!
//! Draws uniform points in the square [-1, 1] x [-1, 1] and tests membership
//! in the inscribed unit circle. The ratio of hits to draws converges to
//! pi/4, which is the whole trick behind the estimator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of inside/outside-circle sample outcomes.
///
/// The trait is the seam that lets tests substitute a deterministic sequence
/// for the production RNG.
pub trait Sampler {
    /// Draw one point and report whether it landed inside the unit circle.
    fn sample_inside(&mut self) -> bool;
}

/// Production sampler backed by a per-instance `SmallRng`.
///
/// Each worker owns its own instance, so the sampling loop runs without any
/// shared state. Determinism between runs is not guaranteed.
pub struct UniformSampler {
    rng: SmallRng,
}

impl UniformSampler {
    /// Create a sampler seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a sampler with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for UniformSampler {
    #[inline]
    fn sample_inside(&mut self) -> bool {
        let x: f64 = self.rng.gen_range(-1.0..=1.0);
        let y: f64 = self.rng.gen_range(-1.0..=1.0);
        x * x + y * y <= 1.0
    }
}

/// Count how many of `n` draws fall inside the unit circle.
pub(crate) fn count_inside<S: Sampler>(sampler: &mut S, n: u64) -> u64 {
    let mut inside = 0u64;
    for _ in 0..n {
        if sampler.sample_inside() {
            inside += 1;
        }
    }
    inside
}
