//! Factories for employees and departments.
//!
//! [`EmployeeFactory`] turns an employee type name into an employee with the
//! configured default terms; [`DepartmentFactory`] turns a department type
//! into a department from the configured presets.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{CompanyMetadata, ConfigLoader, EmployeeDefaults};
use crate::error::PayrollResult;
use crate::models::{
    Department, DepartmentId, Employee, EmployeeId, EmployeeKind, EmployeeProfile, VariantTag,
};
use crate::payroll::{Clock, SystemClock};

use super::EmployeeBuilder;

/// Creates employees from a type name and the configured defaults.
///
/// # Example
///
/// ```
/// use staff_payroll::config::ConfigLoader;
/// use staff_payroll::hiring::EmployeeFactory;
/// use staff_payroll::models::VariantTag;
///
/// let factory = EmployeeFactory::from_config(&ConfigLoader::default());
/// let employee = factory.create_default("part-time", 1001, "Shahd", "Amr")?;
/// assert_eq!(employee.variant(), VariantTag::Hourly);
/// assert_eq!(employee.email, "shahd.amr@company.com");
///
/// assert!(factory.create_default("intern", 1002, "No", "Body").is_err());
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Clone)]
pub struct EmployeeFactory {
    defaults: EmployeeDefaults,
    company: CompanyMetadata,
    clock: Arc<dyn Clock>,
}

impl EmployeeFactory {
    /// Creates a factory with the given defaults, reading hire dates from `clock`.
    pub fn new(defaults: EmployeeDefaults, company: CompanyMetadata, clock: Arc<dyn Clock>) -> Self {
        Self {
            defaults,
            company,
            clock,
        }
    }

    /// Creates a factory from a loaded configuration on the system clock.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(
            config.employee_defaults().clone(),
            config.company().clone(),
            Arc::new(SystemClock),
        )
    }

    /// Returns the defaults used for unspecified terms.
    pub fn defaults(&self) -> &EmployeeDefaults {
        &self.defaults
    }

    /// Creates an employee of the named type with default variant terms.
    ///
    /// Contract end dates are computed from the profile's hire date.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVariant` if `type_name` is not a known employee type.
    pub fn create(
        &self,
        type_name: &str,
        id: EmployeeId,
        profile: EmployeeProfile,
        base_salary: Decimal,
    ) -> PayrollResult<Employee> {
        let variant: VariantTag = type_name.parse()?;
        let kind = self.defaults.kind_for(variant, profile.hire_date);
        debug!(employee_id = id, variant = %variant, "Creating employee");
        Ok(Employee::new(id, profile, base_salary, kind))
    }

    /// Creates an employee with explicit variant terms.
    pub fn create_with_kind(
        &self,
        id: EmployeeId,
        profile: EmployeeProfile,
        base_salary: Decimal,
        kind: EmployeeKind,
    ) -> Employee {
        debug!(employee_id = id, variant = %kind.tag(), "Creating employee");
        Employee::new(id, profile, base_salary, kind)
    }

    /// Creates an employee of the named type hired today, with a generated
    /// email (`first.last@domain`), the default phone number and the default
    /// base salary.
    pub fn create_default(
        &self,
        type_name: &str,
        id: EmployeeId,
        first_name: &str,
        last_name: &str,
    ) -> PayrollResult<Employee> {
        Ok(self.builder(type_name, id, first_name, last_name)?.build())
    }

    /// Returns a builder for an employee of the named type, pre-filled the
    /// same way as [`EmployeeFactory::create_default`]. Callers override
    /// whichever fields they know.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVariant` if `type_name` is not a known employee type.
    pub fn builder(
        &self,
        type_name: &str,
        id: EmployeeId,
        first_name: &str,
        last_name: &str,
    ) -> PayrollResult<EmployeeBuilder> {
        let variant: VariantTag = type_name.parse()?;
        debug!(employee_id = id, variant = %variant, "Creating employee");
        Ok(EmployeeBuilder::new(id, first_name, last_name)
            .defaults(self.defaults.clone())
            .variant(variant)
            .email(format!(
                "{}.{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                self.company.email_domain
            ))
            .phone_number(self.company.default_phone.clone())
            .hire_date(self.clock.today()))
    }
}

/// Creates departments from configured presets.
#[derive(Debug, Clone)]
pub struct DepartmentFactory {
    config: ConfigLoader,
}

impl DepartmentFactory {
    /// Creates a factory over the given configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self { config }
    }

    /// Creates a department from the preset for `department_type`
    /// (e.g. `"hr"`, `"IT"`), case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDepartmentType` if no preset exists.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_payroll::config::ConfigLoader;
    /// use staff_payroll::hiring::DepartmentFactory;
    ///
    /// let factory = DepartmentFactory::new(ConfigLoader::default());
    /// let hr = factory.create("HR", 1)?;
    /// assert_eq!(hr.name, "Human Resources");
    /// # Ok::<(), staff_payroll::error::PayrollError>(())
    /// ```
    pub fn create(&self, department_type: &str, id: DepartmentId) -> PayrollResult<Department> {
        let preset = self.config.department_preset(department_type)?;
        Ok(Department::new(
            id,
            preset.name.clone(),
            preset.manager_name.clone(),
            preset.location.clone(),
        ))
    }

    /// Creates a department with explicit fields.
    pub fn create_custom(
        &self,
        id: DepartmentId,
        name: &str,
        manager_name: &str,
        location: &str,
    ) -> Department {
        Department::new(id, name, manager_name, location)
    }

    /// Department types with a preset, in alphabetical order.
    pub fn available_types(&self) -> Vec<String> {
        self.config.config().departments().keys().cloned().collect()
    }
}
