//! Core data models for the payroll engine.
//!
//! This module contains the employee, pay modifier and department models
//! used throughout the crate.

mod department;
mod employee;
mod modifier;

pub use department::{Department, DepartmentId};
pub use employee::{Employee, EmployeeId, EmployeeKind, EmployeeProfile, VariantTag};
pub use modifier::PayModifier;
