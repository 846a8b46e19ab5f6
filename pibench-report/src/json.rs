//! JSON Output

use crate::report::BenchmarkReport;

/// Generate a prettified JSON report.
///
/// Serializes the benchmark result set into the machine-readable form
/// consumed by external reporting tools.
pub fn generate_json_report(report: &BenchmarkReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
