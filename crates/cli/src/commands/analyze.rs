use std::path::Path;

use anyhow::{Context, Result};
use orgchart_core::analysis::{analyze_with, AnalysisPolicy, AnalysisReport};
use orgchart_core::loader::load_employees;
use tracing::info;

use crate::commands::{load_config, render_report};
use crate::resolve_path;

/// Load employees and config, then run both structure checks.
pub fn run_analysis(
    input: &Path,
    config: Option<&Path>,
) -> Result<(AnalysisReport, AnalysisPolicy)> {
    let policy = load_config(config)?.into_policy().context("Invalid analysis configuration")?;

    let employees = load_employees(input)
        .with_context(|| format!("Failed to load employees from {}", input.display()))?;
    info!(path = %input.display(), employees = employees.len(), "loaded employee records");

    let report = analyze_with(&employees, &policy).context("Error during analysis")?;
    Ok((report, policy))
}

/// Analyze an employee file and print the findings.
pub fn analyze_command(input: &str, config: Option<&str>, json: bool) -> Result<()> {
    let input_path = resolve_path(input)?;
    let config_path = config.map(resolve_path).transpose()?;

    let (report, policy) = run_analysis(&input_path, config_path.as_deref())?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_report(&report, &policy));
    }

    Ok(())
}
