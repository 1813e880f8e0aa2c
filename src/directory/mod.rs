//! Employee and department records.
//!
//! The [`Directory`] trait is the data-access seam used by the API layer.
//! [`InMemoryDirectory`] is the bundled implementation; it keeps employees
//! and departments behind a single lock so department membership and each
//! employee's `department_id` never disagree.

mod memory;

pub use memory::InMemoryDirectory;

use crate::error::PayrollResult;
use crate::models::{Department, DepartmentId, Employee, EmployeeId};

/// Storage for employees and departments.
pub trait Directory: Send + Sync {
    /// Stores a new employee.
    ///
    /// If the employee names a department, it is added to that department's
    /// members.
    ///
    /// # Errors
    ///
    /// `DuplicateEmployee` if the id is taken, `DepartmentNotFound` if the
    /// named department does not exist.
    fn insert_employee(&self, employee: Employee) -> PayrollResult<()>;

    /// Returns a copy of the employee with `id`.
    fn get_employee(&self, id: EmployeeId) -> PayrollResult<Employee>;

    /// Replaces a stored employee, moving department membership if the
    /// employee's department changed.
    fn update_employee(&self, employee: Employee) -> PayrollResult<()>;

    /// Removes an employee and its department membership.
    fn delete_employee(&self, id: EmployeeId) -> PayrollResult<Employee>;

    /// All employees in id order.
    fn list_employees(&self) -> Vec<Employee>;

    /// Employees whose first name, last name or department name contains
    /// `keyword`, ignoring case.
    fn search_employees(&self, keyword: &str) -> Vec<Employee>;

    /// An id not used by any stored employee.
    fn next_employee_id(&self) -> EmployeeId;

    /// Stores a new department.
    fn insert_department(&self, department: Department) -> PayrollResult<()>;

    /// Returns a copy of the department with `id`.
    fn get_department(&self, id: DepartmentId) -> PayrollResult<Department>;

    /// All departments in id order.
    fn list_departments(&self) -> Vec<Department>;

    /// Replaces a department's name, manager and location. Membership is
    /// kept as stored.
    fn update_department(&self, department: Department) -> PayrollResult<()>;

    /// Removes a department. Its members stay in the directory with no
    /// department.
    fn delete_department(&self, id: DepartmentId) -> PayrollResult<Department>;

    /// Moves an employee into `department_id`, or out of any department
    /// when `None`.
    fn assign_department(
        &self,
        employee_id: EmployeeId,
        department_id: Option<DepartmentId>,
    ) -> PayrollResult<Employee>;

    /// An id not used by any stored department.
    fn next_department_id(&self) -> DepartmentId;
}
