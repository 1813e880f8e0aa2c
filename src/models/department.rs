//! Department model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Identifier of a department.
pub type DepartmentId = u32;

/// A department and the set of employees assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: DepartmentId,
    /// Display name, e.g. "Human Resources".
    pub name: String,
    /// Name of the department manager.
    pub manager_name: String,
    /// Where the department sits.
    pub location: String,
    /// Employees assigned to the department.
    #[serde(default)]
    members: BTreeSet<EmployeeId>,
}

impl Department {
    /// Creates a department with no members.
    pub fn new(
        id: DepartmentId,
        name: impl Into<String>,
        manager_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            manager_name: manager_name.into(),
            location: location.into(),
            members: BTreeSet::new(),
        }
    }

    /// Adds an employee. Returns `false` if the employee was already a member.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::models::Department;
    ///
    /// let mut it = Department::new(3, "Information Technology", "IT Manager", "Building B, Floor 3");
    /// assert!(it.add_member(10));
    /// assert!(!it.add_member(10));
    /// assert_eq!(it.member_count(), 1);
    /// ```
    pub fn add_member(&mut self, employee_id: EmployeeId) -> bool {
        self.members.insert(employee_id)
    }

    /// Removes an employee. Returns `false` if the employee was not a member.
    pub fn remove_member(&mut self, employee_id: EmployeeId) -> bool {
        self.members.remove(&employee_id)
    }

    /// Returns true if the employee is assigned to this department.
    pub fn has_member(&self, employee_id: EmployeeId) -> bool {
        self.members.contains(&employee_id)
    }

    /// Number of employees in the department.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Member identifiers in ascending order.
    pub fn members(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.members.iter().copied()
    }
}
