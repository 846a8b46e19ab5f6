//! Output Formatting
//!
//! Human-readable terminal output: one table row per configuration with
//! mean time, spread, speedup and the Pi estimate, plus a system footer.

use crate::report::BenchmarkReport;

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &BenchmarkReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Pi Benchmark Results\n");
    output.push_str(&"=".repeat(72));
    output.push_str("\n\n");

    let max_label_len = report
        .configurations
        .iter()
        .map(|c| c.label.len())
        .max()
        .unwrap_or(20);

    output.push_str(&format!(
        "  {:<width$}  {:>19}  {:>8}  {:>12}  {:>10}\n",
        "Configuration",
        "Time (s)",
        "Speedup",
        "Pi estimate",
        "Error",
        width = max_label_len
    ));
    output.push_str(&format!("  {}\n", "-".repeat(max_label_len + 58)));

    for summary in &report.configurations {
        let time_str = format!("{:.4} ± {:.4}", summary.mean_time, summary.std_dev_time);
        let speedup_str = format!("{:.2}x", summary.speedup);

        output.push_str(&format!(
            "  {:<width$}  {:>19}  {:>8}  {:>12.8}  {:>10.8}\n",
            summary.label,
            time_str,
            speedup_str,
            summary.mean_pi,
            summary.pi_error,
            width = max_label_len
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "  System: {} cores ({}/{})\n",
        report.meta.system.cpu_cores, report.meta.system.os, report.meta.system.arch
    ));
    output.push_str(&format!(
        "  Run: {} samples x {} repetitions\n",
        report.meta.config.sample_count, report.meta.config.repetition_count
    ));

    output
}
