//! Core data model for employee records.
//!
//! Records are produced by a record source (see [`crate::loader`]) and are
//! treated as an immutable snapshot for the duration of one analysis run.

use serde::{Deserialize, Serialize};

/// A single employee as read from the record source.
///
/// `manager_id` is `None` for the organizational root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub salary: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: u64,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id: None,
        }
    }

    /// Builder-style helper to attach a manager reference.
    pub fn reporting_to(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    /// True when the record has no manager reference.
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
