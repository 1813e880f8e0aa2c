//! The view of an employee the payroll ledger works with.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeId};

/// Something that can be paid through the payroll ledger.
pub trait Payable {
    /// Identifier the ledger records payments under.
    fn payee_id(&self) -> EmployeeId;

    /// Name used in payroll log messages.
    fn payee_name(&self) -> String;

    /// The amount to pay for the current run.
    fn payable_amount(&self) -> PayrollResult<Decimal>;
}

impl Payable for Employee {
    fn payee_id(&self) -> EmployeeId {
        self.id()
    }

    fn payee_name(&self) -> String {
        self.full_name()
    }

    fn payable_amount(&self) -> PayrollResult<Decimal> {
        self.checked_salary()
    }
}
