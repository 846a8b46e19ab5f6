//! Configuration loading from pibench.toml
//!
//! Settings can be specified in a `pibench.toml` file discovered by walking
//! up from the current directory. CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// PiBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PibenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Random samples per estimation
    #[serde(default = "default_samples")]
    pub samples: u64,
    /// Repetitions per configuration
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    /// Worker counts for the parallel configurations, in run order
    #[serde(default = "default_workers")]
    pub workers: Vec<usize>,
    /// Per-worker timeout in seconds for the parallel estimator
    #[serde(default = "default_worker_timeout")]
    pub worker_timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            repetitions: default_repetitions(),
            workers: default_workers(),
            worker_timeout_secs: default_worker_timeout(),
        }
    }
}

fn default_samples() -> u64 {
    1_000_000
}
fn default_repetitions() -> usize {
    5
}
fn default_workers() -> Vec<usize> {
    vec![2, 4, 8]
}
fn default_worker_timeout() -> u64 {
    60
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl PibenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("pibench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
