//! Hierarchy construction from a flat list of employee records.
//!
//! The builder derives two mappings:
//! - `subordinates_by_manager`: manager id -> direct reports, in input order.
//! - `manager_by_employee`: employee id -> immediate manager id (roots excluded).
//!
//! Neither mapping validates the input. Duplicate ids, dangling manager
//! references, and multiple roots are tolerated; the first occurrence of a
//! duplicated id decides its manager.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::model::Employee;

/// Manager/subordinate adjacency borrowed from an employee snapshot.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy<'a> {
    subordinates_by_manager: HashMap<&'a str, Vec<&'a Employee>>,
    manager_by_employee: HashMap<&'a str, &'a str>,
}

impl<'a> Hierarchy<'a> {
    /// Build both mappings in a single pass over `employees`.
    pub fn build(employees: &'a [Employee]) -> Self {
        let mut subordinates_by_manager: HashMap<&'a str, Vec<&'a Employee>> = HashMap::new();
        let mut manager_by_employee: HashMap<&'a str, &'a str> = HashMap::new();
        let mut seen: HashSet<&'a str> = HashSet::with_capacity(employees.len());
        let mut roots = 0usize;

        for employee in employees {
            if !seen.insert(employee.id.as_str()) {
                warn!(employee_id = %employee.id, "duplicate employee id; first occurrence wins");
            }

            let Some(manager_id) = employee.manager_id.as_deref() else {
                roots += 1;
                continue;
            };

            subordinates_by_manager.entry(manager_id).or_default().push(employee);

            if let Entry::Vacant(slot) = manager_by_employee.entry(employee.id.as_str()) {
                slot.insert(manager_id);
            }
        }

        for manager_id in subordinates_by_manager.keys() {
            if !seen.contains(manager_id) {
                warn!(manager_id = %manager_id, "manager reference points to an unknown employee");
            }
        }
        if !employees.is_empty() && roots != 1 {
            warn!(roots, "expected exactly one employee without a manager");
        }

        debug!(
            employees = employees.len(),
            managers = subordinates_by_manager.len(),
            links = manager_by_employee.len(),
            "built hierarchy"
        );

        Self { subordinates_by_manager, manager_by_employee }
    }

    /// Direct reports of `manager_id`, in input order. Empty for non-managers.
    pub fn subordinates_of(&self, manager_id: &str) -> &[&'a Employee] {
        self.subordinates_by_manager.get(manager_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Immediate manager of `employee_id`, if the employee has one.
    pub fn manager_of(&self, employee_id: &str) -> Option<&'a str> {
        self.manager_by_employee.get(employee_id).copied()
    }

    /// True when at least one record reports directly to `employee_id`.
    pub fn is_manager(&self, employee_id: &str) -> bool {
        !self.subordinates_of(employee_id).is_empty()
    }

    /// Number of distinct manager ids referenced by the snapshot.
    ///
    /// Dangling references count, since they are keys of the subordinates mapping.
    pub fn manager_count(&self) -> usize {
        self.subordinates_by_manager.len()
    }

    pub fn subordinates_by_manager(&self) -> &HashMap<&'a str, Vec<&'a Employee>> {
        &self.subordinates_by_manager
    }

    pub fn manager_by_employee(&self) -> &HashMap<&'a str, &'a str> {
        &self.manager_by_employee
    }
}
