//! Salary and benefits computation.
//!
//! An employee's pay is its base variant's pay folded through the ordered
//! list of pay modifiers, each adding its own contribution. Benefits text is
//! built the same way: base text first, then one line per modifier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeKind};

/// Separator placed between benefit descriptions.
pub const BENEFITS_DELIMITER: &str = ", ";

/// Weeks per pay period used by the hourly salary rule.
pub const WEEKS_PER_PERIOD: u32 = 4;

/// One itemised contribution to an employee's pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationLine {
    /// `"base"` or the modifier kind (`"bonus"`, `"overtime"`, `"certification"`).
    pub kind: String,
    /// Human-readable description of the line.
    pub description: String,
    /// Amount this line contributes.
    pub amount: Decimal,
}

/// An itemised salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Pay from the base variant alone.
    pub base_pay: Decimal,
    /// The base line followed by one line per modifier, in application order.
    pub lines: Vec<CompensationLine>,
    /// Sum of all lines.
    pub total: Decimal,
}

/// Returns the pay produced by the base variant, before modifiers.
///
/// Salaried and contract employees are paid their base salary; hourly
/// employees are paid `hourly_rate * hours_per_week * 4`.
///
/// # Examples
///
/// ```
/// use staff_payroll::compensation::base_pay;
/// use staff_payroll::models::EmployeeKind;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hourly = EmployeeKind::Hourly {
///     hours_per_week: 20,
///     hourly_rate: Decimal::from_str("15.0").unwrap(),
/// };
/// assert_eq!(base_pay(&hourly, Decimal::from(3000)), Decimal::from(1200));
/// ```
pub fn base_pay(kind: &EmployeeKind, base_salary: Decimal) -> Decimal {
    match kind {
        EmployeeKind::Salaried { .. } | EmployeeKind::Contract { .. } => base_salary,
        EmployeeKind::Hourly {
            hours_per_week,
            hourly_rate,
        } => hourly_rate * Decimal::from(*hours_per_week) * Decimal::from(WEEKS_PER_PERIOD),
    }
}

fn checked_base_pay(kind: &EmployeeKind, base_salary: Decimal) -> Option<Decimal> {
    match kind {
        EmployeeKind::Salaried { .. } | EmployeeKind::Contract { .. } => Some(base_salary),
        EmployeeKind::Hourly {
            hours_per_week,
            hourly_rate,
        } => hourly_rate
            .checked_mul(Decimal::from(*hours_per_week))?
            .checked_mul(Decimal::from(WEEKS_PER_PERIOD)),
    }
}

/// Returns the benefits description of the base variant, before modifiers.
pub fn base_benefits(kind: &EmployeeKind) -> String {
    match kind {
        EmployeeKind::Salaried { annual_leave_days } => format!(
            "Health Insurance, Pension Plan, {} Annual Leave Days",
            annual_leave_days
        ),
        EmployeeKind::Hourly { .. } => "Flexible Schedule, Limited Leave Days".to_string(),
        EmployeeKind::Contract {
            contract_end_date,
            project_name,
        } => format!(
            "Project: {}, Contract until: {}",
            project_name, contract_end_date
        ),
    }
}

/// Returns the employee's payable salary.
pub fn calculate_salary(employee: &Employee) -> Decimal {
    employee
        .modifiers()
        .iter()
        .fold(base_pay(employee.kind(), employee.base_salary), |pay, modifier| {
            pay + modifier.contribution()
        })
}

/// Returns the employee's payable salary, reporting decimal overflow as an error.
pub fn checked_salary(employee: &Employee) -> PayrollResult<Decimal> {
    let overflow = || PayrollError::CalculationError {
        message: format!("salary of employee {} overflows", employee.id()),
    };

    let base = checked_base_pay(employee.kind(), employee.base_salary).ok_or_else(overflow)?;
    employee.modifiers().iter().try_fold(base, |pay, modifier| {
        modifier
            .checked_contribution()
            .and_then(|contribution| pay.checked_add(contribution))
            .ok_or_else(overflow)
    })
}

/// Returns the employee's benefits description.
///
/// The base description comes first, followed by each modifier's line in
/// the order the modifiers were applied.
pub fn benefits(employee: &Employee) -> String {
    employee
        .modifiers()
        .iter()
        .fold(base_benefits(employee.kind()), |text, modifier| {
            append_benefit(text, &modifier.description())
        })
}

fn append_benefit(mut text: String, addition: &str) -> String {
    if !text.is_empty() {
        text.push_str(BENEFITS_DELIMITER);
    }
    text.push_str(addition);
    text
}

/// Returns the itemised salary calculation for an employee.
///
/// # Errors
///
/// Returns `CalculationError` if any line or the total overflows, exactly
/// when [`checked_salary`] does.
pub fn salary_breakdown(employee: &Employee) -> PayrollResult<SalaryBreakdown> {
    let overflow = || PayrollError::CalculationError {
        message: format!("salary of employee {} overflows", employee.id()),
    };

    let base = checked_base_pay(employee.kind(), employee.base_salary).ok_or_else(overflow)?;
    let mut lines = vec![CompensationLine {
        kind: "base".to_string(),
        description: format!("{} base pay", employee.variant()),
        amount: base,
    }];
    let mut total = base;
    for modifier in employee.modifiers() {
        let amount = modifier.checked_contribution().ok_or_else(overflow)?;
        total = total.checked_add(amount).ok_or_else(overflow)?;
        lines.push(CompensationLine {
            kind: modifier.kind_name().to_string(),
            description: modifier.description(),
            amount,
        });
    }

    Ok(SalaryBreakdown {
        base_pay: base,
        lines,
        total,
    })
}
