use std::path::Path;

use anyhow::{Context, Result};
use orgchart_core::config::AnalysisConfig;

use crate::resolve_path;

/// Load the analysis config from `path`, or the built-in defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("Failed to load analysis config at {}", path.display())),
        None => Ok(AnalysisConfig::default()),
    }
}

/// Print the effective analysis configuration.
pub fn show_config_command(config: Option<&str>, json: bool) -> Result<()> {
    let config_path = config.map(resolve_path).transpose()?;
    let config = load_config(config_path.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Analysis Config");
    println!("===============");
    match &config_path {
        Some(path) => println!("Source: {}", path.display()),
        None => println!("Source: (built-in defaults)"),
    }
    println!("Salary band min ratio: {}", config.salary_band.min_ratio);
    println!("Salary band max ratio: {}", config.salary_band.max_ratio);
    println!("Max reporting depth: {}", config.max_reporting_depth);

    Ok(())
}
