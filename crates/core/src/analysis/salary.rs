use std::collections::HashSet;

use tracing::debug;

use super::{round_cents, AnalysisPolicy, IssueType, SalaryIssue};
use crate::hierarchy::Hierarchy;
use crate::model::Employee;

/// Compare every manager's salary against the band derived from the average
/// salary of their direct reports.
///
/// Issues come out in input order of the managers. A manager id that appears
/// more than once is evaluated once, using its first record.
pub fn salary_issues(
    employees: &[Employee],
    hierarchy: &Hierarchy<'_>,
    policy: &AnalysisPolicy,
) -> Vec<SalaryIssue> {
    let mut issues = Vec::new();
    let mut evaluated: HashSet<&str> = HashSet::new();

    for manager in employees {
        let subordinates = hierarchy.subordinates_of(&manager.id);
        if subordinates.is_empty() || !evaluated.insert(manager.id.as_str()) {
            continue;
        }

        let total: u128 = subordinates.iter().map(|e| u128::from(e.salary)).sum();
        let average = total as f64 / subordinates.len() as f64;
        let min_expected = average * policy.min_salary_ratio;
        let max_expected = average * policy.max_salary_ratio;
        let salary = manager.salary as f64;

        let finding = if salary < min_expected {
            Some((IssueType::Underpaid, min_expected - salary))
        } else if salary > max_expected {
            Some((IssueType::Overpaid, salary - max_expected))
        } else {
            None
        };

        debug!(
            manager_id = %manager.id,
            reports = subordinates.len(),
            average,
            min_expected,
            max_expected,
            salary = manager.salary,
            "checked manager salary band"
        );

        if let Some((issue_type, difference)) = finding {
            issues.push(SalaryIssue {
                employee_id: manager.id.clone(),
                employee_first_name: manager.first_name.clone(),
                employee_last_name: manager.last_name.clone(),
                issue_type,
                difference: round_cents(difference),
            });
        }
    }

    issues
}
