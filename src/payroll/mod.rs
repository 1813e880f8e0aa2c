//! Payroll processing for the payroll engine.
//!
//! This module contains the [`PayrollLedger`], which records payroll runs
//! with an at-most-once-per-day guarantee per employee, the [`Clock`]
//! abstraction it reads "today" from, and the reports it produces.

mod clock;
mod ledger;
mod report;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ledger::{PayrollLedger, PayrollOutcome};
pub use report::{EMPTY_LEDGER_MESSAGE, PayrollReport, ReportLine, ReportScope};
