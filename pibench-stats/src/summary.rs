//! Summary Statistics
//!
//! Mean and standard deviation use the sample (n-1) estimator; a single
//! observation has undefined variance and reports a stddev of 0.0.

use serde::{Deserialize, Serialize};

/// Summary statistics over one configuration's elapsed-time samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (0.0 for fewer than two samples).
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Number of observations.
    pub sample_count: usize,
}

/// Compute summary statistics for a sample set.
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics {
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sample_count: 0,
        };
    }

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    let std_dev = if samples.len() < 2 {
        0.0
    } else {
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
        variance.sqrt()
    };

    let min = samples
        .iter()
        .cloned()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);
    let max = samples
        .iter()
        .cloned()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);

    SummaryStatistics {
        mean,
        std_dev,
        min,
        max,
        sample_count: samples.len(),
    }
}

impl SummaryStatistics {
    /// Coefficient of variation (relative stddev, in percent).
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&samples);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.sample_count, 5);
        // Sample stddev of 1..5 is sqrt(2.5)
        assert!((summary.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_stddev() {
        let summary = compute_summary(&[0.42]);
        assert_eq!(summary.sample_count, 1);
        assert!((summary.std_dev - 0.0).abs() < f64::EPSILON);
        assert_eq!(summary.min, 0.42);
        assert_eq!(summary.max, 0.42);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.sample_count, 0);
        assert!((summary.mean - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let summary = compute_summary(&[100.0, 100.0, 100.0]);
        assert!((summary.coefficient_of_variation() - 0.0).abs() < f64::EPSILON);
    }
}
