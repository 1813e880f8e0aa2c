//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, the [`EmployeeKind`] enum
//! that fixes how an employee's base pay is computed, and the closed
//! [`VariantTag`] discriminator used by factories and the prototype registry.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compensation::{self, SalaryBreakdown};
use crate::error::{PayrollError, PayrollResult};

use super::{DepartmentId, PayModifier};

/// Identifier of an employee.
pub type EmployeeId = u32;

/// The closed set of employee compensation bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantTag {
    /// Full-time employee paid a fixed salary.
    Salaried,
    /// Part-time employee paid by the hour.
    Hourly,
    /// Contractor paid an agreed project rate.
    Contract,
}

impl VariantTag {
    /// All variants, in declaration order.
    pub const ALL: [VariantTag; 3] = [VariantTag::Salaried, VariantTag::Hourly, VariantTag::Contract];

    /// Returns the canonical lowercase name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantTag::Salaried => "salaried",
            VariantTag::Hourly => "hourly",
            VariantTag::Contract => "contract",
        }
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantTag {
    type Err = PayrollError;

    /// Parses an employee type name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The
    /// legacy names `full-time`, `part-time` and `contractor` are accepted
    /// alongside the canonical names.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::models::VariantTag;
    ///
    /// assert_eq!("Full-time".parse::<VariantTag>().unwrap(), VariantTag::Salaried);
    /// assert_eq!(" hourly ".parse::<VariantTag>().unwrap(), VariantTag::Hourly);
    /// assert!("intern".parse::<VariantTag>().is_err());
    /// ```
    fn from_str(s: &str) -> PayrollResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "salaried" | "full-time" | "full_time" | "fulltime" | "full time" => {
                Ok(VariantTag::Salaried)
            }
            "hourly" | "part-time" | "part_time" | "parttime" | "part time" => Ok(VariantTag::Hourly),
            "contract" | "contractor" => Ok(VariantTag::Contract),
            _ => Err(PayrollError::InvalidVariant {
                variant: s.to_string(),
            }),
        }
    }
}

/// The compensation base of an employee, with its variant-specific terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Full-time employee; pay equals base salary.
    Salaried {
        /// Number of paid annual leave days.
        annual_leave_days: u32,
    },
    /// Part-time employee; pay is `hourly_rate * hours_per_week * 4`.
    Hourly {
        /// Contracted hours per week.
        hours_per_week: u32,
        /// Rate paid per hour.
        hourly_rate: Decimal,
    },
    /// Contractor; pay equals base salary, treated as the agreed project rate.
    Contract {
        /// Date the contract ends.
        contract_end_date: NaiveDate,
        /// Name of the project the contractor is engaged on.
        project_name: String,
    },
}

impl EmployeeKind {
    /// Returns the variant discriminator.
    pub fn tag(&self) -> VariantTag {
        match self {
            EmployeeKind::Salaried { .. } => VariantTag::Salaried,
            EmployeeKind::Hourly { .. } => VariantTag::Hourly,
            EmployeeKind::Contract { .. } => VariantTag::Contract,
        }
    }
}

/// Identity and contact fields shared by every employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date the employee was hired.
    pub hire_date: NaiveDate,
    /// Department the employee belongs to, if any.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
}

/// An employee: identity, contact details, a compensation base and an ordered
/// list of pay modifiers layered on top of it.
///
/// The identifier and the variant are fixed at construction. Contact fields
/// and the base salary are public and may be edited freely; input is not
/// validated and is reflected as-is in salary and benefits output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Date the employee was hired.
    pub hire_date: NaiveDate,
    /// Department the employee belongs to, if any.
    pub department_id: Option<DepartmentId>,
    /// Base salary. For hourly employees this is informational only.
    pub base_salary: Decimal,
    kind: EmployeeKind,
    #[serde(default)]
    modifiers: Vec<PayModifier>,
}

impl Employee {
    /// Creates an employee with no pay modifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::models::{Employee, EmployeeKind, EmployeeProfile};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let profile = EmployeeProfile {
    ///     first_name: "Mona".to_string(),
    ///     last_name: "Salem".to_string(),
    ///     email: "mona.salem@company.com".to_string(),
    ///     phone_number: "555-0100".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     department_id: None,
    /// };
    /// let employee = Employee::new(
    ///     1,
    ///     profile,
    ///     Decimal::from(6000),
    ///     EmployeeKind::Salaried { annual_leave_days: 20 },
    /// );
    /// assert_eq!(employee.calculate_salary(), Decimal::from(6000));
    /// ```
    pub fn new(
        id: EmployeeId,
        profile: EmployeeProfile,
        base_salary: Decimal,
        kind: EmployeeKind,
    ) -> Self {
        Self {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone_number: profile.phone_number,
            hire_date: profile.hire_date,
            department_id: profile.department_id,
            base_salary,
            kind,
            modifiers: Vec::new(),
        }
    }

    /// Returns the employee identifier.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the compensation base.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Returns the variant discriminator.
    pub fn variant(&self) -> VariantTag {
        self.kind.tag()
    }

    /// Returns the pay modifiers in the order they were applied.
    pub fn modifiers(&self) -> &[PayModifier] {
        &self.modifiers
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the identity and contact fields.
    pub fn profile(&self) -> EmployeeProfile {
        EmployeeProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            hire_date: self.hire_date,
            department_id: self.department_id,
        }
    }

    /// Layers a pay modifier on top of the existing chain.
    pub fn apply_modifier(&mut self, modifier: PayModifier) {
        self.modifiers.push(modifier);
    }

    /// Consuming form of [`Employee::apply_modifier`].
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::hiring::EmployeeBuilder;
    /// use staff_payroll::models::PayModifier;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeBuilder::new(1, "Omar", "Tamer")
    ///     .base_salary(Decimal::from(6000))
    ///     .build()
    ///     .with_modifier(PayModifier::bonus(Decimal::from(1000), "Performance Bonus"));
    /// assert_eq!(employee.calculate_salary(), Decimal::from(7000));
    /// ```
    pub fn with_modifier(mut self, modifier: PayModifier) -> Self {
        self.apply_modifier(modifier);
        self
    }

    /// Removes every pay modifier, returning the employee to its base pay.
    pub fn clear_modifiers(&mut self) {
        self.modifiers.clear();
    }

    /// Stamps a new identity onto a copy of an employee.
    ///
    /// Variant, terms, salary, department and modifiers are carried over
    /// unchanged. Used to turn a cloned template into a new employee.
    pub fn with_identity(
        mut self,
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.id = id;
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.email = email.into();
        self
    }

    /// Returns the current payable salary: base pay plus every modifier's contribution.
    pub fn calculate_salary(&self) -> Decimal {
        compensation::calculate_salary(self)
    }

    /// Like [`Employee::calculate_salary`] but reports decimal overflow as an error.
    pub fn checked_salary(&self) -> PayrollResult<Decimal> {
        compensation::checked_salary(self)
    }

    /// Returns the human-readable benefits description.
    pub fn benefits(&self) -> String {
        compensation::benefits(self)
    }

    /// Returns the itemised salary calculation.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` on decimal overflow.
    pub fn salary_breakdown(&self) -> PayrollResult<SalaryBreakdown> {
        compensation::salary_breakdown(self)
    }
}
