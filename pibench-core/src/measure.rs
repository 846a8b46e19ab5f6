//! Wall-Clock Timing
//!
//! Thin wrapper over the monotonic `std::time::Instant` clock. Estimators
//! time only their sampling phase, never input validation.

use std::time::{Duration, Instant};

/// Timer for measuring one estimation run.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed duration.
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return elapsed wall-clock seconds.
    #[inline(always)]
    pub fn stop_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
