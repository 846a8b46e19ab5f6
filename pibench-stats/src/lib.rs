#![warn(missing_docs)]
//! PiBench Statistical Engine
//!
//! Summary statistics over repeated timing measurements:
//! - Mean, sample standard deviation, min, max
//! - Speedup relative to a baseline, with a zero-duration guard

mod speedup;
mod summary;

pub use speedup::compute_speedup;
pub use summary::{SummaryStatistics, compute_summary};
