#![warn(missing_docs)]
//! PiBench Report - Result Data Model and Output
//!
//! Generates the consumable forms of a benchmark run:
//! - JSON (machine-readable, for external reporting collaborators)
//! - Human-readable terminal table

mod format;
mod json;
mod report;

pub use format::format_human_output;
pub use json::generate_json_report;
pub use report::{
    BenchmarkReport, BenchmarkSummary, ReportConfig, ReportMeta, SEQUENTIAL_KEY, SystemInfo,
    parallel_key,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
