//! Prototype registry: template employees per variant, cloned on demand.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use crate::config::PrototypeTemplate;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{DepartmentId, Employee, EmployeeId, VariantTag};

/// A registry of template employees keyed by variant.
///
/// Templates are never handed out directly; [`PrototypeRegistry::get`] and
/// [`PrototypeRegistry::clone_and_customize`] always return a fresh copy.
///
/// # Example
///
/// ```
/// use staff_payroll::config::ConfigLoader;
/// use staff_payroll::hiring::PrototypeRegistry;
/// use staff_payroll::models::VariantTag;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let registry = PrototypeRegistry::with_templates(
///     ConfigLoader::default().config().prototypes(),
///     today,
/// )?;
/// let hire = registry.clone_and_customize(
///     VariantTag::Hourly, 2001, "Laila", "Said", "laila.said@company.com", None,
/// )?;
/// assert_eq!(hire.first_name, "Laila");
/// assert_eq!(registry.get(VariantTag::Hourly).unwrap().first_name, "Prototype");
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrototypeRegistry {
    prototypes: BTreeMap<VariantTag, Employee>,
}

impl PrototypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from configured templates, hired on `hire_date`.
    ///
    /// # Errors
    ///
    /// Returns `PrototypeMismatch` if a template is filed under a variant
    /// other than its own.
    pub fn with_templates(
        templates: &BTreeMap<VariantTag, PrototypeTemplate>,
        hire_date: NaiveDate,
    ) -> PayrollResult<Self> {
        let mut registry = Self::new();
        for (variant, template) in templates {
            registry.register(*variant, template.to_employee(0, hire_date))?;
        }
        info!(count = registry.prototypes.len(), "Prototype registry initialized");
        Ok(registry)
    }

    /// Registers (or replaces) the template for `variant`.
    ///
    /// # Errors
    ///
    /// Returns `PrototypeMismatch` if the template is not of `variant`.
    pub fn register(&mut self, variant: VariantTag, template: Employee) -> PayrollResult<()> {
        if template.variant() != variant {
            return Err(PayrollError::PrototypeMismatch {
                expected: variant,
                actual: template.variant(),
            });
        }
        self.prototypes.insert(variant, template);
        Ok(())
    }

    /// Returns a copy of the template for `variant`.
    pub fn get(&self, variant: VariantTag) -> Option<Employee> {
        self.prototypes.get(&variant).cloned()
    }

    /// Copies the template for `variant` and gives the copy a new identity.
    ///
    /// # Errors
    ///
    /// Returns `PrototypeNotFound` if no template is registered for `variant`.
    pub fn clone_and_customize(
        &self,
        variant: VariantTag,
        id: EmployeeId,
        first_name: &str,
        last_name: &str,
        email: &str,
        department_id: Option<DepartmentId>,
    ) -> PayrollResult<Employee> {
        let template = self
            .get(variant)
            .ok_or(PayrollError::PrototypeNotFound { variant })?;
        let mut employee = template.with_identity(id, first_name, last_name, email);
        employee.department_id = department_id;
        Ok(employee)
    }

    /// Returns true if a template is registered for `variant`.
    pub fn contains(&self, variant: VariantTag) -> bool {
        self.prototypes.contains_key(&variant)
    }

    /// Variants with a registered template, in declaration order.
    pub fn available(&self) -> Vec<VariantTag> {
        self.prototypes.keys().copied().collect()
    }

    /// Removes the template for `variant`, returning it.
    pub fn remove(&mut self, variant: VariantTag) -> Option<Employee> {
        self.prototypes.remove(&variant)
    }

    /// Removes every template.
    pub fn clear(&mut self) {
        self.prototypes.clear();
        info!("All prototypes cleared");
    }
}

/// Copies an existing employee under a new identifier, marking the copy's
/// first name and email so it is recognisable.
///
/// # Example
///
/// ```
/// use staff_payroll::hiring::{EmployeeBuilder, duplicate_employee};
///
/// let source = EmployeeBuilder::new(1, "Eyad", "Hesham").email("eyad@company.com").build();
/// let copy = duplicate_employee(&source, 2);
/// assert_eq!(copy.first_name, "Copy of Eyad");
/// assert_eq!(copy.email, "copy.eyad@company.com");
/// assert_eq!(source.first_name, "Eyad");
/// ```
pub fn duplicate_employee(source: &Employee, new_id: EmployeeId) -> Employee {
    let first_name = format!("Copy of {}", source.first_name);
    let email = format!("copy.{}", source.email);
    let last_name = source.last_name.clone();
    source
        .clone()
        .with_identity(new_id, first_name, last_name, email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrototypesConfig;
    use crate::hiring::EmployeeBuilder;
    use crate::models::PayModifier;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn create_test_registry() -> PrototypeRegistry {
        PrototypeRegistry::with_templates(&PrototypesConfig::default().prototypes, today()).unwrap()
    }

    #[test]
    fn test_registry_seeded_with_every_variant() {
        let registry = create_test_registry();
        assert_eq!(registry.available(), VariantTag::ALL.to_vec());
        for tag in VariantTag::ALL {
            assert!(registry.contains(tag));
        }
    }

    #[test]
    fn test_get_returns_independent_copy() {
        let registry = create_test_registry();
        let mut copy = registry.get(VariantTag::Salaried).unwrap();
        copy.first_name = "Mutated".to_string();
        copy.base_salary = Decimal::from(1);

        let fresh = registry.get(VariantTag::Salaried).unwrap();
        assert_eq!(fresh.first_name, "Prototype");
        assert_eq!(fresh.base_salary, Decimal::from(5000));
    }

    #[test]
    fn test_clone_and_customize_sets_identity() {
        let registry = create_test_registry();
        let employee = registry
            .clone_and_customize(
                VariantTag::Contract,
                3001,
                "Youssef",
                "Kamal",
                "youssef.kamal@company.com",
                Some(2),
            )
            .unwrap();

        assert_eq!(employee.id(), 3001);
        assert_eq!(employee.full_name(), "Youssef Kamal");
        assert_eq!(employee.department_id, Some(2));
        assert_eq!(employee.variant(), VariantTag::Contract);
        assert_eq!(employee.calculate_salary(), Decimal::from(7000));
        assert_eq!(employee.hire_date, today());
    }

    #[test]
    fn test_clone_and_customize_missing_prototype() {
        let mut registry = create_test_registry();
        registry.remove(VariantTag::Hourly);

        let result = registry.clone_and_customize(VariantTag::Hourly, 1, "A", "B", "a@b.c", None);
        assert!(matches!(
            result,
            Err(PayrollError::PrototypeNotFound {
                variant: VariantTag::Hourly
            })
        ));
    }

    #[test]
    fn test_register_rejects_mismatched_variant() {
        let mut registry = PrototypeRegistry::new();
        let salaried = EmployeeBuilder::new(0, "Template", "Salaried").build();

        let result = registry.register(VariantTag::Hourly, salaried);
        assert!(matches!(result, Err(PayrollError::PrototypeMismatch { .. })));
        assert!(!registry.contains(VariantTag::Hourly));
    }

    #[test]
    fn test_templates_filed_under_wrong_variant_are_rejected() {
        let mut templates = PrototypesConfig::default().prototypes;
        let salaried = templates.remove(&VariantTag::Salaried).unwrap();
        templates.insert(VariantTag::Hourly, salaried);

        match PrototypeRegistry::with_templates(&templates, today()) {
            Err(PayrollError::PrototypeMismatch { expected, actual }) => {
                assert_eq!(expected, VariantTag::Hourly);
                assert_eq!(actual, VariantTag::Salaried);
            }
            other => panic!("Expected PrototypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_register_decorated_template() {
        let mut registry = PrototypeRegistry::new();
        let template = EmployeeBuilder::new(0, "Senior", "Engineer")
            .base_salary(Decimal::from(8000))
            .modifier(PayModifier::certification("AWS Certified", Decimal::from(500)))
            .build();
        registry.register(VariantTag::Salaried, template).unwrap();

        let hire = registry
            .clone_and_customize(VariantTag::Salaried, 10, "Nour", "Ali", "nour@company.com", None)
            .unwrap();
        assert_eq!(hire.calculate_salary(), Decimal::from(8500));
        assert_eq!(hire.modifiers().len(), 1);
    }

    #[test]
    fn test_clear_empties_registry() {
        let mut registry = create_test_registry();
        registry.clear();
        assert!(registry.available().is_empty());
        assert!(registry.get(VariantTag::Salaried).is_none());
    }

    #[test]
    fn test_duplicate_keeps_compensation() {
        let source = EmployeeBuilder::new(1, "Eyad", "Hesham")
            .email("eyad@company.com")
            .base_salary(Decimal::from(6000))
            .modifier(PayModifier::bonus(Decimal::from(1000), "Performance"))
            .build();
        let copy = duplicate_employee(&source, 77);

        assert_eq!(copy.id(), 77);
        assert_eq!(copy.last_name, "Hesham");
        assert_eq!(copy.calculate_salary(), source.calculate_salary());
        assert_eq!(source.id(), 1);
    }
}
