//! Estimator Error Taxonomy

use std::time::Duration;
use thiserror::Error;

/// Errors produced by the estimators.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// A count argument was zero. Rejected before any work is performed.
    #[error("invalid argument: {name} must be > 0, got {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// A worker failed to report its result within the timeout.
    ///
    /// Fatal for the enclosing estimation call; never retried.
    #[error("worker {worker} did not complete within {timeout:?} (possible deadlock)")]
    WorkerTimeout {
        /// Index of the first worker that never reported.
        worker: usize,
        /// The timeout that elapsed.
        timeout: Duration,
    },
}

impl EstimateError {
    /// Whether this error is an input-validation rejection.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, EstimateError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EstimateError::InvalidArgument {
            name: "sample_count",
            value: 0,
        };
        assert!(err.to_string().contains("sample_count"));
        assert!(err.is_invalid_argument());

        let err = EstimateError::WorkerTimeout {
            worker: 3,
            timeout: Duration::from_secs(60),
        };
        assert!(err.to_string().contains("worker 3"));
        assert!(!err.is_invalid_argument());
    }
}
