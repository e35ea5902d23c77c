//! orgchart-core
//!
//! Core library for analyzing the structure of an organization from a flat
//! list of employee records.
//!
//! This crate defines the employee model, the hierarchy builder (manager and
//! subordinate adjacency), the structure analyzer (salary band and
//! reporting-line checks), the CSV record loader, and the analysis
//! configuration.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, services, etc.).

pub mod model;
pub mod hierarchy;
pub mod analysis;
pub mod loader;
pub mod config;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
