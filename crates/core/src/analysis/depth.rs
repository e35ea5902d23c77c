use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AnalysisError, LongReportingLine};
use crate::hierarchy::Hierarchy;
use crate::model::Employee;

/// Number of managers between an employee and the root of their chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingDepth {
    pub employee_id: String,
    pub depth: usize,
}

/// Count the managers between each employee and the top of their chain.
///
/// The root of a chain is not counted, so an employee reporting directly to
/// the CEO has depth 0. A manager reference to an unknown id ends the walk
/// without adding a hop. A walk longer than the number of employees can only
/// happen on a cycle and fails the whole computation.
///
/// One entry per distinct employee id, in input order.
pub fn reporting_depths(
    employees: &[Employee],
    hierarchy: &Hierarchy<'_>,
) -> Result<Vec<ReportingDepth>, AnalysisError> {
    let limit = employees.len();
    let mut seen: HashSet<&str> = HashSet::with_capacity(limit);
    let mut depths = Vec::with_capacity(limit);

    for employee in employees {
        if !seen.insert(employee.id.as_str()) {
            continue;
        }

        let depth = managers_above(employee, hierarchy, limit)?;
        debug!(employee_id = %employee.id, depth, "resolved reporting depth");
        depths.push(ReportingDepth { employee_id: employee.id.clone(), depth });
    }

    Ok(depths)
}

/// Walk upward from `employee`, counting every manager who has a manager of
/// their own. Fails once the count exceeds `limit`.
pub fn managers_above(
    employee: &Employee,
    hierarchy: &Hierarchy<'_>,
    limit: usize,
) -> Result<usize, AnalysisError> {
    let mut hops = 0usize;
    let mut current = employee.manager_id.as_deref();
    while let Some(next) = current.and_then(|manager_id| hierarchy.manager_of(manager_id)) {
        hops += 1;
        if hops > limit {
            return Err(AnalysisError::CircularReference { employee_id: employee.id.clone() });
        }
        current = Some(next);
    }
    Ok(hops)
}

/// Employees whose depth exceeds `max_depth`, with the number of extra managers.
pub fn long_reporting_lines(depths: &[ReportingDepth], max_depth: usize) -> Vec<LongReportingLine> {
    depths
        .iter()
        .filter(|d| d.depth > max_depth)
        .map(|d| LongReportingLine {
            employee_id: d.employee_id.clone(),
            excess_managers: d.depth - max_depth,
        })
        .collect()
}
