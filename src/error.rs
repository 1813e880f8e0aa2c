//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building employees,
//! managing the directory and recording payroll.

use thiserror::Error;

use crate::models::{DepartmentId, EmployeeId, VariantTag};

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use staff_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidVariant {
///     variant: "intern".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid employee type: intern");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee type discriminator is not one of salaried, hourly or contract.
    #[error("Invalid employee type: {variant}")]
    InvalidVariant {
        /// The discriminator that was supplied.
        variant: String,
    },

    /// No department preset exists for the requested type.
    #[error("Invalid department type: {department_type}")]
    InvalidDepartmentType {
        /// The department type that was supplied.
        department_type: String,
    },

    /// No employee is stored under the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: EmployeeId,
    },

    /// No department is stored under the given identifier.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// The identifier that was looked up.
        id: DepartmentId,
    },

    /// An employee with this identifier already exists.
    #[error("Employee already exists: {id}")]
    DuplicateEmployee {
        /// The conflicting identifier.
        id: EmployeeId,
    },

    /// A department with this identifier already exists.
    #[error("Department already exists: {id}")]
    DuplicateDepartment {
        /// The conflicting identifier.
        id: DepartmentId,
    },

    /// No prototype is registered for the variant.
    #[error("No prototype registered for {variant}")]
    PrototypeNotFound {
        /// The variant that was requested.
        variant: VariantTag,
    },

    /// A template was registered under a tag that does not match its variant.
    #[error("Prototype for {expected} must be a {expected} employee, got {actual}")]
    PrototypeMismatch {
        /// The tag the template was registered under.
        expected: VariantTag,
        /// The template's actual variant.
        actual: VariantTag,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A monetary calculation overflowed.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
