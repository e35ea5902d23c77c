//! Structure analysis over an employee snapshot.
//!
//! Two checks run against the [`Hierarchy`] derived from the records:
//! - salary band: managers must earn between `min_ratio` and `max_ratio`
//!   times the average salary of their direct reports;
//! - reporting lines: no employee may have more than `max_reporting_depth`
//!   managers between them and the root of their chain.
//!
//! A circular management chain makes depth undefined and aborts the whole
//! run; every other data-quality problem is tolerated.

mod depth;
mod salary;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::hierarchy::Hierarchy;
use crate::model::Employee;

pub use depth::{long_reporting_lines, managers_above, reporting_depths, ReportingDepth};
pub use salary::salary_issues;

/// Default lower bound of the manager salary band (20% above the average).
pub const DEFAULT_MIN_SALARY_RATIO: f64 = 1.2;
/// Default upper bound of the manager salary band (50% above the average).
pub const DEFAULT_MAX_SALARY_RATIO: f64 = 1.5;
/// Default number of managers allowed between an employee and the root.
pub const DEFAULT_MAX_REPORTING_DEPTH: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// The upward walk from `employee_id` did not reach a root within
    /// as many hops as there are employees.
    #[error("Circular reference detected in management chain starting at employee {employee_id}")]
    CircularReference { employee_id: String },
    #[error("Invalid analysis policy: {0}")]
    InvalidPolicy(String),
}

/// Thresholds applied by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisPolicy {
    pub min_salary_ratio: f64,
    pub max_salary_ratio: f64,
    pub max_reporting_depth: usize,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            min_salary_ratio: DEFAULT_MIN_SALARY_RATIO,
            max_salary_ratio: DEFAULT_MAX_SALARY_RATIO,
            max_reporting_depth: DEFAULT_MAX_REPORTING_DEPTH,
        }
    }
}

impl AnalysisPolicy {
    /// Reject ratios that are negative, non-finite, or inverted.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let ratios = [
            ("min_salary_ratio", self.min_salary_ratio),
            ("max_salary_ratio", self.max_salary_ratio),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::InvalidPolicy(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        if self.min_salary_ratio > self.max_salary_ratio {
            return Err(AnalysisError::InvalidPolicy(format!(
                "min_salary_ratio ({}) exceeds max_salary_ratio ({})",
                self.min_salary_ratio, self.max_salary_ratio
            )));
        }
        Ok(())
    }
}

/// Direction of a salary band violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Underpaid,
    Overpaid,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Underpaid => "UNDERPAID",
            IssueType::Overpaid => "OVERPAID",
        }
    }
}

/// A manager whose salary falls outside the expected band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryIssue {
    pub employee_id: String,
    pub employee_first_name: String,
    pub employee_last_name: String,
    pub issue_type: IssueType,
    /// Distance to the nearest band edge, rounded to two decimals.
    pub difference: f64,
}

/// An employee with too many managers above them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongReportingLine {
    pub employee_id: String,
    pub excess_managers: usize,
}

/// Findings of one analysis run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub salary_issues: Vec<SalaryIssue>,
    pub long_reporting_lines: Vec<LongReportingLine>,
}

impl AnalysisReport {
    pub fn is_clean(&self) -> bool {
        self.salary_issues.is_empty() && self.long_reporting_lines.is_empty()
    }
}

/// Analyze `employees` with the default policy.
pub fn analyze(employees: &[Employee]) -> Result<AnalysisReport, AnalysisError> {
    analyze_with(employees, &AnalysisPolicy::default())
}

/// Analyze `employees` with an explicit policy.
///
/// Reporting depths are computed first so a circular chain fails the run
/// before any finding is produced.
pub fn analyze_with(
    employees: &[Employee],
    policy: &AnalysisPolicy,
) -> Result<AnalysisReport, AnalysisError> {
    policy.validate()?;

    let hierarchy = Hierarchy::build(employees);
    let depths = reporting_depths(employees, &hierarchy)?;
    let long_reporting_lines = long_reporting_lines(&depths, policy.max_reporting_depth);
    let salary_issues = salary_issues(employees, &hierarchy, policy);

    info!(
        employees = employees.len(),
        salary_issues = salary_issues.len(),
        long_reporting_lines = long_reporting_lines.len(),
        "analysis complete"
    );

    Ok(AnalysisReport { salary_issues, long_reporting_lines })
}

/// Round half-up to two decimal places.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
