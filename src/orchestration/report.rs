// Wed Jan 28 2026 - Alex

use crate::orchestration::runner::RunSummary;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Coordinator-only console report of both results.
pub fn print_summary(summary: &RunSummary) {
    println!("{}", "Integration Results".cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    println!("  Workers: {}", summary.workers.to_string().green());
    println!(
        "  Subintervals: {}",
        summary.subintervals.to_string().green()
    );
    println!(
        "  Coefficients: {}",
        summary.coefficient_count.to_string().green()
    );
    println!();
    println!("  Numerical:  {:.10}", summary.numerical);
    println!("  Analytical: {:.10}", summary.analytical);
    println!("  Difference: {:.3e}", summary.absolute_difference);
}

/// Write the summary as pretty JSON for downstream tooling.
pub fn save_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serializing run summary")?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
