//! In-memory directory.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Department, DepartmentId, Employee, EmployeeId};

use super::Directory;

#[derive(Debug, Default)]
struct Records {
    employees: BTreeMap<EmployeeId, Employee>,
    departments: BTreeMap<DepartmentId, Department>,
}

impl Records {
    fn department_mut(&mut self, id: DepartmentId) -> PayrollResult<&mut Department> {
        self.departments
            .get_mut(&id)
            .ok_or(PayrollError::DepartmentNotFound { id })
    }

    fn leave_department(&mut self, employee_id: EmployeeId, department_id: Option<DepartmentId>) {
        if let Some(department) = department_id.and_then(|id| self.departments.get_mut(&id)) {
            department.remove_member(employee_id);
        }
    }

    fn department_name(&self, employee: &Employee) -> Option<&str> {
        employee
            .department_id
            .and_then(|id| self.departments.get(&id))
            .map(|department| department.name.as_str())
    }
}

/// A [`Directory`] held in memory.
///
/// Reads share the lock; every write takes it exclusively, so a membership
/// change updates the employee and both departments in one step.
///
/// # Example
///
/// ```
/// use staff_payroll::directory::{Directory, InMemoryDirectory};
/// use staff_payroll::hiring::EmployeeBuilder;
/// use staff_payroll::models::Department;
///
/// let directory = InMemoryDirectory::new();
/// directory.insert_department(Department::new(1, "Finance", "Finance Manager", "Building A, Floor 2"))?;
/// directory.insert_employee(EmployeeBuilder::new(7, "Rana", "Fouad").department(1).build())?;
///
/// assert!(directory.get_department(1)?.has_member(7));
/// assert_eq!(directory.search_employees("finance").len(), 1);
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: RwLock<Records>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Directory for InMemoryDirectory {
    fn insert_employee(&self, employee: Employee) -> PayrollResult<()> {
        let mut records = self.records.write();
        let id = employee.id();
        if records.employees.contains_key(&id) {
            return Err(PayrollError::DuplicateEmployee { id });
        }
        if let Some(department_id) = employee.department_id {
            records.department_mut(department_id)?.add_member(id);
        }
        debug!(employee_id = id, variant = %employee.variant(), "Employee stored");
        records.employees.insert(id, employee);
        Ok(())
    }

    fn get_employee(&self, id: EmployeeId) -> PayrollResult<Employee> {
        self.records
            .read()
            .employees
            .get(&id)
            .cloned()
            .ok_or(PayrollError::EmployeeNotFound { id })
    }

    fn update_employee(&self, employee: Employee) -> PayrollResult<()> {
        let mut records = self.records.write();
        let id = employee.id();
        let previous = records
            .employees
            .get(&id)
            .map(|stored| stored.department_id)
            .ok_or(PayrollError::EmployeeNotFound { id })?;

        if previous != employee.department_id {
            if let Some(department_id) = employee.department_id {
                records.department_mut(department_id)?.add_member(id);
            }
            records.leave_department(id, previous);
        }
        records.employees.insert(id, employee);
        Ok(())
    }

    fn delete_employee(&self, id: EmployeeId) -> PayrollResult<Employee> {
        let mut records = self.records.write();
        let employee = records
            .employees
            .remove(&id)
            .ok_or(PayrollError::EmployeeNotFound { id })?;
        records.leave_department(id, employee.department_id);
        info!(employee_id = id, "Employee removed");
        Ok(employee)
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.records.read().employees.values().cloned().collect()
    }

    fn search_employees(&self, keyword: &str) -> Vec<Employee> {
        let needle = keyword.trim().to_lowercase();
        let records = self.records.read();
        records
            .employees
            .values()
            .filter(|employee| {
                employee.first_name.to_lowercase().contains(&needle)
                    || employee.last_name.to_lowercase().contains(&needle)
                    || records
                        .department_name(employee)
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn next_employee_id(&self) -> EmployeeId {
        self.records
            .read()
            .employees
            .keys()
            .next_back()
            .map_or(1, |id| id.saturating_add(1))
    }

    fn insert_department(&self, department: Department) -> PayrollResult<()> {
        let mut records = self.records.write();
        let id = department.id;
        if records.departments.contains_key(&id) {
            return Err(PayrollError::DuplicateDepartment { id });
        }
        debug!(department_id = id, name = %department.name, "Department stored");
        records.departments.insert(id, department);
        Ok(())
    }

    fn get_department(&self, id: DepartmentId) -> PayrollResult<Department> {
        self.records
            .read()
            .departments
            .get(&id)
            .cloned()
            .ok_or(PayrollError::DepartmentNotFound { id })
    }

    fn list_departments(&self) -> Vec<Department> {
        self.records.read().departments.values().cloned().collect()
    }

    fn update_department(&self, department: Department) -> PayrollResult<()> {
        let mut records = self.records.write();
        let stored = records.department_mut(department.id)?;
        stored.name = department.name;
        stored.manager_name = department.manager_name;
        stored.location = department.location;
        Ok(())
    }

    fn delete_department(&self, id: DepartmentId) -> PayrollResult<Department> {
        let mut records = self.records.write();
        let department = records
            .departments
            .remove(&id)
            .ok_or(PayrollError::DepartmentNotFound { id })?;
        for member in department.members() {
            if let Some(employee) = records.employees.get_mut(&member) {
                employee.department_id = None;
            }
        }
        info!(
            department_id = id,
            released = department.member_count(),
            "Department removed"
        );
        Ok(department)
    }

    fn assign_department(
        &self,
        employee_id: EmployeeId,
        department_id: Option<DepartmentId>,
    ) -> PayrollResult<Employee> {
        let mut records = self.records.write();
        let previous = records
            .employees
            .get(&employee_id)
            .map(|employee| employee.department_id)
            .ok_or(PayrollError::EmployeeNotFound { id: employee_id })?;

        if let Some(id) = department_id {
            records.department_mut(id)?.add_member(employee_id);
        }
        if previous != department_id {
            records.leave_department(employee_id, previous);
        }

        let employee = records
            .employees
            .get_mut(&employee_id)
            .ok_or(PayrollError::EmployeeNotFound { id: employee_id })?;
        employee.department_id = department_id;
        Ok(employee.clone())
    }

    fn next_department_id(&self) -> DepartmentId {
        self.records
            .read()
            .departments
            .keys()
            .next_back()
            .map_or(1, |id| id.saturating_add(1))
    }
}
