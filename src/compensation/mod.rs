//! Compensation model for the payroll engine.
//!
//! This module computes an employee's payable salary and benefits
//! description from its base variant and the pay modifiers layered on top
//! of it, and defines the [`Payable`] view consumed by the payroll ledger.

mod payable;
mod salary;

pub use payable::Payable;
pub use salary::{
    BENEFITS_DELIMITER, CompensationLine, SalaryBreakdown, WEEKS_PER_PERIOD, base_benefits,
    base_pay, benefits, calculate_salary, checked_salary, salary_breakdown,
};
