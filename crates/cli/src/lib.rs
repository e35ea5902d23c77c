use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Resolve a user-supplied path against the current working directory.
///
/// Absolute paths are returned as-is; existing relative paths are
/// canonicalized, anything else is joined onto the current directory so error
/// messages show where we actually looked.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(_) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(cwd.join(path))
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    let filter = EnvFilter::try_new(filter).context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}
