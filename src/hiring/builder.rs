//! Step-by-step employee construction.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::config::EmployeeDefaults;
use crate::models::{
    DepartmentId, Employee, EmployeeId, EmployeeKind, EmployeeProfile, PayModifier, VariantTag,
};

/// Builds an [`Employee`] from a handful of required fields and any number of
/// optional ones.
///
/// Unset fields fall back to [`EmployeeDefaults`]; the hire date defaults to
/// today and the variant to salaried.
///
/// # Example
///
/// ```
/// use staff_payroll::hiring::EmployeeBuilder;
/// use staff_payroll::models::{PayModifier, VariantTag};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeBuilder::new(42, "Fatma", "Mohamed")
///     .email("fatma@company.com")
///     .variant(VariantTag::Hourly)
///     .hours_per_week(20)
///     .hourly_rate(Decimal::from(15))
///     .modifier(PayModifier::certification("Scrum Master", Decimal::from(100)))
///     .build();
///
/// assert_eq!(employee.calculate_salary(), Decimal::from(1300));
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeBuilder {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    hire_date: Option<NaiveDate>,
    department_id: Option<DepartmentId>,
    base_salary: Option<Decimal>,
    variant: VariantTag,
    annual_leave_days: Option<u32>,
    hours_per_week: Option<u32>,
    hourly_rate: Option<Decimal>,
    contract_end_date: Option<NaiveDate>,
    project_name: Option<String>,
    modifiers: Vec<PayModifier>,
    defaults: EmployeeDefaults,
}

impl EmployeeBuilder {
    /// Starts a builder with the required identity fields.
    pub fn new(id: EmployeeId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: String::new(),
            phone_number: String::new(),
            hire_date: None,
            department_id: None,
            base_salary: None,
            variant: VariantTag::Salaried,
            annual_leave_days: None,
            hours_per_week: None,
            hourly_rate: None,
            contract_end_date: None,
            project_name: None,
            modifiers: Vec::new(),
            defaults: EmployeeDefaults::default(),
        }
    }

    /// Uses `defaults` for every field left unset.
    pub fn defaults(mut self, defaults: EmployeeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone number.
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the hire date.
    pub fn hire_date(mut self, hire_date: NaiveDate) -> Self {
        self.hire_date = Some(hire_date);
        self
    }

    /// Assigns the employee to a department.
    pub fn department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Sets the base salary.
    pub fn base_salary(mut self, base_salary: Decimal) -> Self {
        self.base_salary = Some(base_salary);
        self
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: VariantTag) -> Self {
        self.variant = variant;
        self
    }

    /// Sets annual leave days (salaried only).
    pub fn annual_leave_days(mut self, days: u32) -> Self {
        self.annual_leave_days = Some(days);
        self
    }

    /// Sets weekly hours (hourly only).
    pub fn hours_per_week(mut self, hours: u32) -> Self {
        self.hours_per_week = Some(hours);
        self
    }

    /// Sets the hourly rate (hourly only).
    pub fn hourly_rate(mut self, rate: Decimal) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Sets the contract end date (contract only).
    pub fn contract_end_date(mut self, date: NaiveDate) -> Self {
        self.contract_end_date = Some(date);
        self
    }

    /// Sets the project name (contract only).
    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    /// Adds a pay modifier. Modifiers are applied in the order added.
    pub fn modifier(mut self, modifier: PayModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Builds the employee.
    ///
    /// Terms set for a variant other than the chosen one are ignored.
    pub fn build(self) -> Employee {
        let hire_date = self.hire_date.unwrap_or_else(|| Local::now().date_naive());
        let mut kind = self.defaults.kind_for(self.variant, hire_date);
        match &mut kind {
            EmployeeKind::Salaried { annual_leave_days } => {
                if let Some(days) = self.annual_leave_days {
                    *annual_leave_days = days;
                }
            }
            EmployeeKind::Hourly {
                hours_per_week,
                hourly_rate,
            } => {
                if let Some(hours) = self.hours_per_week {
                    *hours_per_week = hours;
                }
                if let Some(rate) = self.hourly_rate {
                    *hourly_rate = rate;
                }
            }
            EmployeeKind::Contract {
                contract_end_date,
                project_name,
            } => {
                if let Some(date) = self.contract_end_date {
                    *contract_end_date = date;
                }
                if let Some(name) = self.project_name {
                    *project_name = name;
                }
            }
        }

        let profile = EmployeeProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            hire_date,
            department_id: self.department_id,
        };
        let base_salary = self.base_salary.unwrap_or(self.defaults.base_salary);

        self.modifiers.into_iter().fold(
            Employee::new(self.id, profile, base_salary, kind),
            Employee::with_modifier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_only_required_fields() {
        let employee = EmployeeBuilder::new(1, "Mona", "Salem").build();

        assert_eq!(employee.id(), 1);
        assert_eq!(employee.variant(), VariantTag::Salaried);
        assert_eq!(employee.base_salary, Decimal::from(5000));
        assert_eq!(employee.kind(), &EmployeeKind::Salaried { annual_leave_days: 20 });
        assert!(employee.email.is_empty());
        assert!(employee.department_id.is_none());
    }

    #[test]
    fn test_build_contract_with_explicit_terms() {
        let end = NaiveDate::from_ymd_opt(2027, 6, 30).unwrap();
        let employee = EmployeeBuilder::new(2, "Karim", "Adel")
            .variant(VariantTag::Contract)
            .base_salary(Decimal::from(9000))
            .contract_end_date(end)
            .project_name("Data Platform")
            .hire_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .department(4)
            .build();

        assert_eq!(
            employee.kind(),
            &EmployeeKind::Contract {
                contract_end_date: end,
                project_name: "Data Platform".to_string(),
            }
        );
        assert_eq!(employee.calculate_salary(), Decimal::from(9000));
        assert_eq!(employee.department_id, Some(4));
    }

    #[test]
    fn test_terms_for_other_variants_are_ignored() {
        let employee = EmployeeBuilder::new(3, "Sara", "Nabil")
            .hours_per_week(40)
            .annual_leave_days(25)
            .build();

        assert_eq!(employee.kind(), &EmployeeKind::Salaried { annual_leave_days: 25 });
    }

    #[test]
    fn test_modifiers_applied_in_order() {
        let employee = EmployeeBuilder::new(4, "Hana", "Ali")
            .base_salary(Decimal::from(6000))
            .modifier(PayModifier::bonus(Decimal::from(1000), "Performance"))
            .modifier(PayModifier::overtime(Decimal::from(10), Decimal::from(25)))
            .build();

        assert_eq!(employee.modifiers().len(), 2);
        assert_eq!(employee.modifiers()[0].kind_name(), "bonus");
        assert_eq!(employee.calculate_salary(), Decimal::from(7250));
    }

    #[test]
    fn test_custom_defaults_fill_unset_fields() {
        let defaults = EmployeeDefaults {
            hourly_rate: Decimal::from(22),
            hours_per_week: 10,
            ..EmployeeDefaults::default()
        };
        let employee = EmployeeBuilder::new(5, "Tarek", "Fahmy")
            .defaults(defaults)
            .variant(VariantTag::Hourly)
            .build();

        assert_eq!(employee.calculate_salary(), Decimal::from(880));
    }
}
