//! The payroll ledger.
//!
//! This module provides [`PayrollLedger`], the record of cumulative payroll
//! totals, last-processed dates and per-date payment history for every
//! employee. An employee is paid at most once per calendar day.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compensation::Payable;
use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeId;

use super::clock::{Clock, SystemClock};
use super::report::{PayrollReport, ReportLine, ReportScope};

/// What happened when payroll was run for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayrollOutcome {
    /// The employee was paid.
    Processed {
        /// Amount paid in this run.
        amount: Decimal,
        /// Cumulative total after this run.
        total_paid: Decimal,
        /// Date the run was recorded under.
        date: NaiveDate,
    },
    /// The employee had already been paid today; nothing changed.
    AlreadyProcessed {
        /// The date of the earlier run.
        date: NaiveDate,
    },
}

impl PayrollOutcome {
    /// Returns true if this run paid the employee.
    pub fn is_processed(&self) -> bool {
        matches!(self, PayrollOutcome::Processed { .. })
    }
}

/// Ledger state for a single employee.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LedgerEntry {
    total_paid: Decimal,
    last_processed: NaiveDate,
    history: BTreeMap<NaiveDate, Decimal>,
}

/// Records payroll runs and aggregates them into running totals.
///
/// A single ledger is meant to live for the whole process and be shared
/// through an [`Arc`]. Every operation takes the same lock, so concurrent
/// callers never observe a total without its matching date stamp.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use staff_payroll::hiring::EmployeeBuilder;
/// use staff_payroll::payroll::{ManualClock, PayrollLedger};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let clock = Arc::new(ManualClock::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// let ledger = PayrollLedger::new(clock.clone());
/// let employee = EmployeeBuilder::new(1, "Abdelrahman", "Mohamed")
///     .base_salary(Decimal::from(6000))
///     .build();
///
/// ledger.process_payroll(&employee)?;
/// ledger.process_payroll(&employee)?; // same day: ignored
/// assert_eq!(ledger.get_total_paid(1), Decimal::from(6000));
///
/// clock.advance_days(1);
/// ledger.process_payroll(&employee)?;
/// assert_eq!(ledger.get_total_paid(1), Decimal::from(12000));
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
pub struct PayrollLedger {
    clock: Arc<dyn Clock>,
    entries: Mutex<BTreeMap<EmployeeId, LedgerEntry>>,
}

impl PayrollLedger {
    /// Creates an empty ledger that reads "today" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        info!("Payroll ledger initialized");
        Self {
            clock,
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Creates an empty ledger on the system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Returns today's date according to the ledger's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Pays an employee for today.
    ///
    /// If the employee was already paid today this is a no-op and returns
    /// [`PayrollOutcome::AlreadyProcessed`]. Otherwise the payable amount is
    /// added to the employee's cumulative total and recorded in the history
    /// under today's date.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Payable::payable_amount`], and returns
    /// `CalculationError` if the employee's cumulative total or the grand total
    /// across all employees would overflow. On error the ledger is left
    /// exactly as it was.
    pub fn process_payroll<P: Payable + ?Sized>(&self, payee: &P) -> PayrollResult<PayrollOutcome> {
        let employee_id = payee.payee_id();
        let today = self.clock.today();
        let mut entries = self.entries.lock();

        let previous = entries.get(&employee_id);
        if previous.is_some_and(|entry| entry.last_processed == today) {
            info!(
                employee_id,
                employee = %payee.payee_name(),
                date = %today,
                "Payroll already processed today"
            );
            return Ok(PayrollOutcome::AlreadyProcessed { date: today });
        }

        let amount = payee.payable_amount()?;
        let previous_total = previous.map_or(Decimal::ZERO, |entry| entry.total_paid);
        let total_paid =
            previous_total
                .checked_add(amount)
                .ok_or_else(|| PayrollError::CalculationError {
                    message: format!("cumulative payroll total for employee {} overflows", employee_id),
                })?;
        // The all-time report sums every employee's total; it must stay representable.
        entries
            .iter()
            .filter(|(id, _)| **id != employee_id)
            .try_fold(total_paid, |sum, (_, entry)| sum.checked_add(entry.total_paid))
            .ok_or_else(|| PayrollError::CalculationError {
                message: format!(
                    "paying employee {} would overflow the payroll grand total",
                    employee_id
                ),
            })?;

        // Everything fallible is done; commit total, date and history together.
        let entry = entries.entry(employee_id).or_insert_with(|| LedgerEntry {
            total_paid: Decimal::ZERO,
            last_processed: today,
            history: BTreeMap::new(),
        });
        entry.total_paid = total_paid;
        entry.last_processed = today;
        entry.history.insert(today, amount);

        info!(
            employee_id,
            employee = %payee.payee_name(),
            amount = %amount,
            total_paid = %total_paid,
            date = %today,
            "Payroll processed"
        );

        Ok(PayrollOutcome::Processed {
            amount,
            total_paid,
            date: today,
        })
    }

    /// Returns the cumulative amount paid to an employee, or zero if never paid.
    pub fn get_total_paid(&self, employee_id: EmployeeId) -> Decimal {
        self.entries
            .lock()
            .get(&employee_id)
            .map_or(Decimal::ZERO, |entry| entry.total_paid)
    }

    /// Returns the date an employee was last paid.
    pub fn last_processed(&self, employee_id: EmployeeId) -> Option<NaiveDate> {
        self.entries
            .lock()
            .get(&employee_id)
            .map(|entry| entry.last_processed)
    }

    /// Returns a snapshot of every employee's cumulative total.
    pub fn all_totals(&self) -> BTreeMap<EmployeeId, Decimal> {
        self.entries
            .lock()
            .iter()
            .map(|(id, entry)| (*id, entry.total_paid))
            .collect()
    }

    /// Returns a snapshot of one employee's per-date payment history.
    pub fn history(&self, employee_id: EmployeeId) -> BTreeMap<NaiveDate, Decimal> {
        self.entries
            .lock()
            .get(&employee_id)
            .map(|entry| entry.history.clone())
            .unwrap_or_default()
    }

    /// Returns a snapshot of every employee's per-date payment history.
    pub fn payroll_history(&self) -> BTreeMap<EmployeeId, BTreeMap<NaiveDate, Decimal>> {
        self.entries
            .lock()
            .iter()
            .map(|(id, entry)| (*id, entry.history.clone()))
            .collect()
    }

    /// Number of employees with at least one recorded run.
    pub fn processed_count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Builds the all-time report: cumulative total per employee and a grand total.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the grand total is not representable.
    pub fn payroll_report(&self) -> PayrollResult<PayrollReport> {
        let lines = self
            .entries
            .lock()
            .iter()
            .map(|(id, entry)| ReportLine {
                employee_id: *id,
                amount: entry.total_paid,
            })
            .collect();
        PayrollReport::new(ReportScope::AllTime, lines)
    }

    /// Builds the report of payments recorded on `date`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the day's total is not representable.
    pub fn daily_report(&self, date: NaiveDate) -> PayrollResult<PayrollReport> {
        let lines = self
            .entries
            .lock()
            .iter()
            .filter_map(|(id, entry)| {
                entry.history.get(&date).map(|amount| ReportLine {
                    employee_id: *id,
                    amount: *amount,
                })
            })
            .collect();
        PayrollReport::new(ReportScope::Daily(date), lines)
    }

    /// Renders the all-time report as text.
    ///
    /// Returns `"No payroll has been processed yet."` when the ledger is empty.
    pub fn generate_payroll_report(&self) -> PayrollResult<String> {
        Ok(self.payroll_report()?.to_string())
    }

    /// Renders the report of payments recorded on `date` as text.
    pub fn generate_daily_report(&self, date: NaiveDate) -> PayrollResult<String> {
        Ok(self.daily_report(date)?.to_string())
    }

    /// Forgets every recorded run.
    pub fn clear_records(&self) {
        let mut entries = self.entries.lock();
        debug!(employees = entries.len(), "Clearing payroll records");
        entries.clear();
        info!("Payroll records cleared");
    }
}

impl std::fmt::Debug for PayrollLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayrollLedger")
            .field("entries", &*self.entries.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EmployeeKind, EmployeeProfile, PayModifier};
    use crate::payroll::ManualClock;
    use crate::payroll::report::EMPTY_LEDGER_MESSAGE;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_ledger() -> (Arc<ManualClock>, PayrollLedger) {
        let clock = Arc::new(ManualClock::new(date(2026, 1, 15)));
        let ledger = PayrollLedger::new(clock.clone());
        (clock, ledger)
    }

    fn create_test_employee(id: EmployeeId, kind: EmployeeKind, base_salary: &str) -> Employee {
        let profile = EmployeeProfile {
            first_name: "Abdelrahman".to_string(),
            last_name: "Mohamed".to_string(),
            email: "abdelrahman@company.com".to_string(),
            phone_number: "555-0100".to_string(),
            hire_date: date(2024, 1, 1),
            department_id: None,
        };
        Employee::new(id, profile, dec(base_salary), kind)
    }

    fn salaried(id: EmployeeId, base_salary: &str) -> Employee {
        create_test_employee(id, EmployeeKind::Salaried { annual_leave_days: 20 }, base_salary)
    }

    struct FailingPayee;

    impl Payable for FailingPayee {
        fn payee_id(&self) -> EmployeeId {
            99
        }

        fn payee_name(&self) -> String {
            "Failing Payee".to_string()
        }

        fn payable_amount(&self) -> PayrollResult<Decimal> {
            Err(PayrollError::CalculationError {
                message: "boom".to_string(),
            })
        }
    }

    #[test]
    fn test_first_run_records_salary() {
        let (_, ledger) = create_test_ledger();
        let outcome = ledger.process_payroll(&salaried(1, "6000")).unwrap();

        assert_eq!(
            outcome,
            PayrollOutcome::Processed {
                amount: dec("6000"),
                total_paid: dec("6000"),
                date: date(2026, 1, 15),
            }
        );
        assert_eq!(ledger.get_total_paid(1), dec("6000"));
        assert_eq!(ledger.last_processed(1), Some(date(2026, 1, 15)));
    }

    #[test]
    fn test_second_run_same_day_is_noop() {
        let (_, ledger) = create_test_ledger();
        let employee = salaried(1, "6000");

        assert!(ledger.process_payroll(&employee).unwrap().is_processed());
        let outcome = ledger.process_payroll(&employee).unwrap();

        assert_eq!(
            outcome,
            PayrollOutcome::AlreadyProcessed {
                date: date(2026, 1, 15)
            }
        );
        assert_eq!(ledger.get_total_paid(1), dec("6000"));
    }

    #[test]
    fn test_same_day_guard_ignores_salary_changes() {
        let (_, ledger) = create_test_ledger();
        let mut employee = salaried(1, "6000");
        ledger.process_payroll(&employee).unwrap();

        employee.apply_modifier(PayModifier::bonus(dec("1000"), "Late bonus"));
        ledger.process_payroll(&employee).unwrap();

        assert_eq!(ledger.get_total_paid(1), dec("6000"));
        assert_eq!(ledger.history(1).get(&date(2026, 1, 15)), Some(&dec("6000")));
    }

    #[test]
    fn test_next_day_accumulates() {
        let (clock, ledger) = create_test_ledger();
        let employee = salaried(1, "6000");

        ledger.process_payroll(&employee).unwrap();
        clock.advance_days(1);
        let outcome = ledger.process_payroll(&employee).unwrap();

        assert_eq!(
            outcome,
            PayrollOutcome::Processed {
                amount: dec("6000"),
                total_paid: dec("12000"),
                date: date(2026, 1, 16),
            }
        );
        assert_eq!(ledger.history(1).len(), 2);
    }

    #[test]
    fn test_unknown_employee_total_is_zero() {
        let (_, ledger) = create_test_ledger();
        assert_eq!(ledger.get_total_paid(404), Decimal::ZERO);
        assert!(ledger.last_processed(404).is_none());
        assert!(ledger.history(404).is_empty());
    }

    #[test]
    fn test_failing_payee_leaves_ledger_untouched() {
        let (_, ledger) = create_test_ledger();
        let result = ledger.process_payroll(&FailingPayee);

        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));
        assert_eq!(ledger.processed_count(), 0);
        assert_eq!(ledger.generate_payroll_report().unwrap(), EMPTY_LEDGER_MESSAGE);
    }

    #[test]
    fn test_total_overflow_is_atomic() {
        let (clock, ledger) = create_test_ledger();
        let rich = create_test_employee(
            1,
            EmployeeKind::Salaried { annual_leave_days: 0 },
            &Decimal::MAX.to_string(),
        );

        ledger.process_payroll(&rich).unwrap();
        clock.advance_days(1);
        let result = ledger.process_payroll(&rich);

        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));
        assert_eq!(ledger.get_total_paid(1), Decimal::MAX);
        assert_eq!(ledger.last_processed(1), Some(date(2026, 1, 15)));
        assert_eq!(ledger.history(1).len(), 1);
    }

    #[test]
    fn test_grand_total_overflow_is_refused() {
        let (_, ledger) = create_test_ledger();
        let half = "50000000000000000000000000000";

        ledger.process_payroll(&salaried(1, half)).unwrap();
        match ledger.process_payroll(&salaried(2, half)) {
            Err(PayrollError::CalculationError { message }) => {
                assert!(message.contains("grand total"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }

        assert_eq!(ledger.processed_count(), 1);
        assert_eq!(ledger.get_total_paid(2), Decimal::ZERO);
        assert!(ledger.last_processed(2).is_none());
        let report = ledger.payroll_report().unwrap();
        assert_eq!(report.grand_total, dec(half));
        assert!(
            ledger
                .generate_payroll_report()
                .unwrap()
                .contains("Employee ID: 1 | Total Paid: $50000000000000000000000000000.00")
        );
    }

    #[test]
    fn test_report_on_empty_ledger() {
        let (_, ledger) = create_test_ledger();
        assert_eq!(ledger.generate_payroll_report().unwrap(), EMPTY_LEDGER_MESSAGE);
    }

    #[test]
    fn test_report_grand_total_matches_individual_totals() {
        let (_, ledger) = create_test_ledger();
        let hourly = create_test_employee(
            2,
            EmployeeKind::Hourly {
                hours_per_week: 20,
                hourly_rate: dec("15.0"),
            },
            "3000",
        );
        ledger.process_payroll(&salaried(1, "6000")).unwrap();
        ledger.process_payroll(&hourly).unwrap();

        let report = ledger.payroll_report().unwrap();
        assert_eq!(report.grand_total, ledger.get_total_paid(1) + ledger.get_total_paid(2));
        assert_eq!(
            ledger.generate_payroll_report().unwrap(),
            "===== Payroll Report =====\n\
             Employee ID: 1 | Total Paid: $6000.00\n\
             Employee ID: 2 | Total Paid: $1200.00\n\
             --------------------------\n\
             Total Payroll Paid: $7200.00\n"
        );
    }

    #[test]
    fn test_daily_report_restricted_to_date() {
        let (clock, ledger) = create_test_ledger();
        ledger.process_payroll(&salaried(1, "6000")).unwrap();
        clock.advance_days(1);
        ledger.process_payroll(&salaried(1, "6000")).unwrap();
        ledger.process_payroll(&salaried(2, "4000")).unwrap();

        let first_day = ledger.daily_report(date(2026, 1, 15)).unwrap();
        assert_eq!(first_day.lines.len(), 1);
        assert_eq!(first_day.grand_total, dec("6000"));

        let second_day = ledger.daily_report(date(2026, 1, 16)).unwrap();
        assert_eq!(second_day.lines.len(), 2);
        assert_eq!(second_day.grand_total, dec("10000"));
        assert!(
            ledger
                .generate_daily_report(date(2026, 1, 16))
                .unwrap()
                .starts_with("===== Daily Payroll Report: 2026-01-16 =====\n")
        );
    }

    #[test]
    fn test_all_totals_snapshot() {
        let (_, ledger) = create_test_ledger();
        ledger.process_payroll(&salaried(3, "100")).unwrap();
        ledger.process_payroll(&salaried(1, "200")).unwrap();

        let totals = ledger.all_totals();
        assert_eq!(totals.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(totals[&3], dec("100"));
    }

    #[test]
    fn test_clear_records_resets_everything() {
        let (_, ledger) = create_test_ledger();
        let employee = salaried(1, "6000");
        ledger.process_payroll(&employee).unwrap();
        ledger.clear_records();

        assert_eq!(ledger.processed_count(), 0);
        assert_eq!(ledger.get_total_paid(1), Decimal::ZERO);
        assert!(ledger.payroll_history().is_empty());
        // The same-day guard is reset as well.
        assert!(ledger.process_payroll(&employee).unwrap().is_processed());
    }

    #[test]
    fn test_concurrent_runs_pay_each_employee_once() {
        let (_, ledger) = create_test_ledger();
        let ledger = Arc::new(ledger);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for id in 1..=10 {
                        ledger.process_payroll(&salaried(id, "100")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.processed_count(), 10);
        assert_eq!(ledger.payroll_report().unwrap().grand_total, dec("1000"));
    }

    #[test]
    fn test_ledger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PayrollLedger>();
    }
}
