//! Textual payroll reports.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeId;

/// Message returned when no payroll has been recorded.
pub const EMPTY_LEDGER_MESSAGE: &str = "No payroll has been processed yet.";

const SEPARATOR: &str = "--------------------------";

/// Which report a [`PayrollReport`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "date", rename_all = "snake_case")]
pub enum ReportScope {
    /// Cumulative totals since the ledger was last cleared.
    AllTime,
    /// Amounts paid on a single date.
    Daily(NaiveDate),
}

/// One employee's row in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// The employee the row is about.
    pub employee_id: EmployeeId,
    /// Cumulative total (all-time report) or the amount paid that day (daily report).
    pub amount: Decimal,
}

/// A payroll report: one row per employee, ordered by employee id, and a grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Report scope.
    pub scope: ReportScope,
    /// Rows in ascending employee id order.
    pub lines: Vec<ReportLine>,
    /// Sum of every row.
    pub grand_total: Decimal,
}

impl PayrollReport {
    /// Builds a report from rows already in employee id order.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the rows do not sum to a representable
    /// amount.
    pub fn new(scope: ReportScope, lines: Vec<ReportLine>) -> PayrollResult<Self> {
        let grand_total = lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
            .ok_or_else(|| PayrollError::CalculationError {
                message: "payroll report total overflows".to_string(),
            })?;
        Ok(Self {
            scope,
            lines,
            grand_total,
        })
    }

    /// Returns true if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let footer = match self.scope {
            ReportScope::AllTime => {
                if self.lines.is_empty() {
                    return f.write_str(EMPTY_LEDGER_MESSAGE);
                }
                writeln!(f, "===== Payroll Report =====")?;
                for line in &self.lines {
                    writeln!(
                        f,
                        "Employee ID: {} | Total Paid: ${:.2}",
                        line.employee_id, line.amount
                    )?;
                }
                "Total Payroll Paid"
            }
            ReportScope::Daily(date) => {
                writeln!(f, "===== Daily Payroll Report: {} =====", date)?;
                for line in &self.lines {
                    writeln!(f, "Employee ID: {} | Paid: ${:.2}", line.employee_id, line.amount)?;
                }
                "Total Payroll Paid Today"
            }
        };
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "{}: ${:.2}", footer, self.grand_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_all_time_report_is_fixed_message() {
        let report = PayrollReport::new(ReportScope::AllTime, vec![]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), EMPTY_LEDGER_MESSAGE);
    }

    #[test]
    fn test_all_time_report_layout() {
        let report = PayrollReport::new(
            ReportScope::AllTime,
            vec![
                ReportLine {
                    employee_id: 1,
                    amount: dec("6000"),
                },
                ReportLine {
                    employee_id: 2,
                    amount: dec("1200.5"),
                },
            ],
        )
        .unwrap();
        assert_eq!(report.grand_total, dec("7200.5"));
        assert_eq!(
            report.to_string(),
            "===== Payroll Report =====\n\
             Employee ID: 1 | Total Paid: $6000.00\n\
             Employee ID: 2 | Total Paid: $1200.50\n\
             --------------------------\n\
             Total Payroll Paid: $7200.50\n"
        );
    }

    #[test]
    fn test_empty_daily_report_still_prints_totals() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let report = PayrollReport::new(ReportScope::Daily(date), vec![]).unwrap();
        assert_eq!(
            report.to_string(),
            "===== Daily Payroll Report: 2026-01-15 =====\n\
             --------------------------\n\
             Total Payroll Paid Today: $0.00\n"
        );
    }

    #[test]
    fn test_daily_report_layout() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
        let report = PayrollReport::new(
            ReportScope::Daily(date),
            vec![ReportLine {
                employee_id: 4,
                amount: dec("1200"),
            }],
        )
        .unwrap();
        assert_eq!(
            report.to_string(),
            "===== Daily Payroll Report: 2026-01-16 =====\n\
             Employee ID: 4 | Paid: $1200.00\n\
             --------------------------\n\
             Total Payroll Paid Today: $1200.00\n"
        );
    }

    #[test]
    fn test_unrepresentable_grand_total_is_an_error() {
        let half = dec("50000000000000000000000000000");
        let lines = vec![
            ReportLine {
                employee_id: 1,
                amount: half,
            },
            ReportLine {
                employee_id: 2,
                amount: half,
            },
        ];

        match PayrollReport::new(ReportScope::AllTime, lines) {
            Err(PayrollError::CalculationError { message }) => {
                assert!(message.contains("overflows"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
