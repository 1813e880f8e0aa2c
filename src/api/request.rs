//! Request types for the payroll API.
//!
//! This module defines the JSON request bodies and query strings accepted
//! by the employee, department and payroll endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DepartmentId, EmployeeId, PayModifier};

/// Request body for `POST /employees`.
///
/// Only the type and the names are required; everything else falls back to
/// the configured employee defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Identifier to use. A free one is chosen when absent.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    /// Employee type, e.g. `"salaried"`, `"part-time"`, `"contractor"`.
    #[serde(rename = "type")]
    pub employee_type: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email. Generated from the names when absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Hire date. Today when absent.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Department to join.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// Base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Annual leave days (salaried).
    #[serde(default)]
    pub annual_leave_days: Option<u32>,
    /// Weekly hours (hourly).
    #[serde(default)]
    pub hours_per_week: Option<u32>,
    /// Hourly rate (hourly).
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Contract end date (contract).
    #[serde(default)]
    pub contract_end_date: Option<NaiveDate>,
    /// Project name (contract).
    #[serde(default)]
    pub project_name: Option<String>,
    /// Pay modifiers, applied in order.
    #[serde(default)]
    pub modifiers: Vec<PayModifier>,
}

/// Request body for `POST /employees/from-prototype`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeRequest {
    /// Employee type whose prototype is cloned.
    #[serde(rename = "type")]
    pub employee_type: String,
    /// Identifier to use. A free one is chosen when absent.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email. Generated from the names when absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Department to join.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
}

/// Request body for `PUT /employees/:id`.
///
/// Every field is optional and only the given ones change. The identifier
/// and the employee type cannot be edited; sending either is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Department to move to.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// Leave the current department. Cannot be combined with `department_id`.
    #[serde(default)]
    pub remove_department: bool,
}

/// Request body for `POST /departments`.
///
/// Either `type` names a preset, or `name`, `manager_name` and `location`
/// are all given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// Identifier to use. A free one is chosen when absent.
    #[serde(default)]
    pub id: Option<DepartmentId>,
    /// Preset type, e.g. `"hr"` or `"finance"`.
    #[serde(default, rename = "type")]
    pub department_type: Option<String>,
    /// Department name.
    #[serde(default)]
    pub name: Option<String>,
    /// Manager's name.
    #[serde(default)]
    pub manager_name: Option<String>,
    /// Location.
    #[serde(default)]
    pub location: Option<String>,
}

/// Query string for `GET /employees`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Keyword matched against names and department name.
    pub search: Option<String>,
}

/// Query string for `GET /payroll/report/daily`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyReportQuery {
    /// Report date. Today when absent.
    pub date: Option<NaiveDate>,
}
