//! Serializable analysis configuration.
//!
//! Configuration files may be JSON (`.json`) or YAML (`.yaml` / `.yml`).
//! Every field is optional and falls back to the built-in defaults:
//!
//! ```yaml
//! salary_band:
//!   min_ratio: 1.2
//!   max_ratio: 1.5
//! max_reporting_depth: 4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{
    AnalysisError, AnalysisPolicy, DEFAULT_MAX_REPORTING_DEPTH, DEFAULT_MAX_SALARY_RATIO,
    DEFAULT_MIN_SALARY_RATIO,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config JSON at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse config YAML at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Unsupported config format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}

/// Allowed manager salary range, as multiples of the direct reports' average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBand {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for SalaryBand {
    fn default() -> Self {
        Self { min_ratio: DEFAULT_MIN_SALARY_RATIO, max_ratio: DEFAULT_MAX_SALARY_RATIO }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub salary_band: SalaryBand,
    /// Managers allowed between an employee and the root.
    pub max_reporting_depth: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { salary_band: SalaryBand::default(), max_reporting_depth: DEFAULT_MAX_REPORTING_DEPTH }
    }
}

impl AnalysisConfig {
    /// Load a config file, choosing the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        if ext == "json" {
            serde_json::from_str(&contents)
                .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })
        }
    }

    /// Validate and convert into the thresholds used by the analyzer.
    pub fn into_policy(self) -> Result<AnalysisPolicy, AnalysisError> {
        let policy = AnalysisPolicy {
            min_salary_ratio: self.salary_band.min_ratio,
            max_salary_ratio: self.salary_band.max_ratio,
            max_reporting_depth: self.max_reporting_depth,
        };
        policy.validate()?;
        Ok(policy)
    }
}
