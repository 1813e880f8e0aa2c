//! Pay modifiers layered on top of an employee's base pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A composable pay adjustment.
///
/// Each modifier adds its own contribution to the pay computed beneath it and
/// appends its own line to the benefits description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayModifier {
    /// A one-off bonus.
    Bonus {
        /// Amount added to pay.
        amount: Decimal,
        /// Why the bonus was awarded.
        reason: String,
    },
    /// Overtime paid at a flat hourly rate.
    Overtime {
        /// Overtime hours worked.
        hours: Decimal,
        /// Rate paid per overtime hour.
        rate: Decimal,
    },
    /// Allowance for holding a professional certification.
    Certification {
        /// Name of the certification.
        name: String,
        /// Allowance added to pay.
        allowance: Decimal,
    },
}

impl PayModifier {
    /// Creates a bonus modifier.
    pub fn bonus(amount: Decimal, reason: impl Into<String>) -> Self {
        PayModifier::Bonus {
            amount,
            reason: reason.into(),
        }
    }

    /// Creates an overtime modifier.
    pub fn overtime(hours: Decimal, rate: Decimal) -> Self {
        PayModifier::Overtime { hours, rate }
    }

    /// Creates a certification modifier.
    pub fn certification(name: impl Into<String>, allowance: Decimal) -> Self {
        PayModifier::Certification {
            name: name.into(),
            allowance,
        }
    }

    /// Short machine-readable name of the modifier kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PayModifier::Bonus { .. } => "bonus",
            PayModifier::Overtime { .. } => "overtime",
            PayModifier::Certification { .. } => "certification",
        }
    }

    /// Returns the amount this modifier adds to pay.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::models::PayModifier;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let overtime = PayModifier::overtime(Decimal::from(10), Decimal::from_str("25.0").unwrap());
    /// assert_eq!(overtime.contribution(), Decimal::from(250));
    /// ```
    pub fn contribution(&self) -> Decimal {
        match self {
            PayModifier::Bonus { amount, .. } => *amount,
            PayModifier::Overtime { hours, rate } => hours * rate,
            PayModifier::Certification { allowance, .. } => *allowance,
        }
    }

    /// Like [`PayModifier::contribution`], returning `None` on overflow.
    pub fn checked_contribution(&self) -> Option<Decimal> {
        match self {
            PayModifier::Bonus { amount, .. } => Some(*amount),
            PayModifier::Overtime { hours, rate } => hours.checked_mul(*rate),
            PayModifier::Certification { allowance, .. } => Some(*allowance),
        }
    }

    /// Returns this modifier's line of the benefits description.
    pub fn description(&self) -> String {
        match self {
            PayModifier::Bonus { amount, reason } => format!("Bonus: ${:.2} ({})", amount, reason),
            PayModifier::Overtime { hours, rate } => {
                format!("Overtime: {} hours at ${:.2}/hr", hours.normalize(), rate)
            }
            PayModifier::Certification { name, allowance } => {
                format!("Certification: {} (${:.2} allowance)", name, allowance)
            }
        }
    }
}
