//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure has a
//! built-in default so the engine can run without a configuration directory.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Employee, EmployeeId, EmployeeKind, EmployeeProfile, VariantTag};

/// Company-wide settings from `company.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyMetadata {
    /// Company name.
    pub name: String,
    /// Domain used for generated email addresses.
    pub email_domain: String,
    /// Phone number given to generated employees.
    pub default_phone: String,
}

impl Default for CompanyMetadata {
    fn default() -> Self {
        Self {
            name: "Company".to_string(),
            email_domain: "company.com".to_string(),
            default_phone: "555-0100".to_string(),
        }
    }
}

/// Terms used when an employee is created without explicit values,
/// from `employee_defaults.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeDefaults {
    /// Base salary.
    pub base_salary: Decimal,
    /// Annual leave days for salaried employees.
    pub annual_leave_days: u32,
    /// Weekly hours for hourly employees.
    pub hours_per_week: u32,
    /// Hourly rate for hourly employees.
    pub hourly_rate: Decimal,
    /// Contract length in months, counted from the hire date.
    pub contract_term_months: u32,
    /// Project name for contractors.
    pub project_name: String,
}

impl Default for EmployeeDefaults {
    fn default() -> Self {
        Self {
            base_salary: Decimal::from(5000),
            annual_leave_days: 20,
            hours_per_week: 20,
            hourly_rate: Decimal::new(150, 1),
            contract_term_months: 12,
            project_name: "General Project".to_string(),
        }
    }
}

impl EmployeeDefaults {
    /// Builds the variant with default terms. Contracts end
    /// `contract_term_months` after `start`.
    pub fn kind_for(&self, variant: VariantTag, start: NaiveDate) -> EmployeeKind {
        match variant {
            VariantTag::Salaried => EmployeeKind::Salaried {
                annual_leave_days: self.annual_leave_days,
            },
            VariantTag::Hourly => EmployeeKind::Hourly {
                hours_per_week: self.hours_per_week,
                hourly_rate: self.hourly_rate,
            },
            VariantTag::Contract => EmployeeKind::Contract {
                contract_end_date: contract_end(start, self.contract_term_months),
                project_name: self.project_name.clone(),
            },
        }
    }
}

fn contract_end(start: NaiveDate, months: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// A department preset from `departments.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentPreset {
    /// Department display name.
    pub name: String,
    /// Manager name.
    pub manager_name: String,
    /// Location.
    pub location: String,
}

impl DepartmentPreset {
    fn new(name: &str, manager_name: &str, location: &str) -> Self {
        Self {
            name: name.to_string(),
            manager_name: manager_name.to_string(),
            location: location.to_string(),
        }
    }
}

/// Departments configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsConfig {
    /// Map of lowercase department type to preset.
    pub departments: BTreeMap<String, DepartmentPreset>,
}

impl Default for DepartmentsConfig {
    fn default() -> Self {
        let departments = [
            ("hr", DepartmentPreset::new("Human Resources", "HR Manager", "Building A, Floor 1")),
            ("finance", DepartmentPreset::new("Finance", "Finance Manager", "Building A, Floor 2")),
            (
                "it",
                DepartmentPreset::new("Information Technology", "IT Manager", "Building B, Floor 3"),
            ),
            ("sales", DepartmentPreset::new("Sales", "Sales Manager", "Building A, Floor 3")),
            (
                "operations",
                DepartmentPreset::new("Operations", "Operations Manager", "Building C, Floor 1"),
            ),
        ]
        .into_iter()
        .map(|(key, preset)| (key.to_string(), preset))
        .collect();

        Self { departments }
    }
}

/// Variant-specific terms of a prototype template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateTerms {
    /// Salaried terms.
    Salaried {
        /// Annual leave days.
        annual_leave_days: u32,
    },
    /// Hourly terms.
    Hourly {
        /// Weekly hours.
        hours_per_week: u32,
        /// Hourly rate.
        hourly_rate: Decimal,
    },
    /// Contract terms; the end date is relative to the hire date.
    Contract {
        /// Contract length in months.
        contract_term_months: u32,
        /// Project name.
        project_name: String,
    },
}

impl TemplateTerms {
    /// Returns the variant these terms describe.
    pub fn tag(&self) -> VariantTag {
        match self {
            TemplateTerms::Salaried { .. } => VariantTag::Salaried,
            TemplateTerms::Hourly { .. } => VariantTag::Hourly,
            TemplateTerms::Contract { .. } => VariantTag::Contract,
        }
    }
}

/// A prototype employee from `prototypes.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrototypeTemplate {
    /// Placeholder given name.
    pub first_name: String,
    /// Placeholder family name.
    pub last_name: String,
    /// Placeholder email.
    pub email: String,
    /// Placeholder phone number.
    pub phone_number: String,
    /// Base salary.
    pub base_salary: Decimal,
    /// Variant and its terms.
    pub terms: TemplateTerms,
}

impl PrototypeTemplate {
    fn new(last_name: &str, base_salary: Decimal, terms: TemplateTerms) -> Self {
        Self {
            first_name: "Prototype".to_string(),
            last_name: last_name.to_string(),
            email: "prototype@company.com".to_string(),
            phone_number: "000-000-0000".to_string(),
            base_salary,
            terms,
        }
    }

    /// Materialises the template as an employee hired on `hire_date`.
    pub fn to_employee(&self, id: EmployeeId, hire_date: NaiveDate) -> Employee {
        let kind = match &self.terms {
            TemplateTerms::Salaried { annual_leave_days } => EmployeeKind::Salaried {
                annual_leave_days: *annual_leave_days,
            },
            TemplateTerms::Hourly {
                hours_per_week,
                hourly_rate,
            } => EmployeeKind::Hourly {
                hours_per_week: *hours_per_week,
                hourly_rate: *hourly_rate,
            },
            TemplateTerms::Contract {
                contract_term_months,
                project_name,
            } => EmployeeKind::Contract {
                contract_end_date: contract_end(hire_date, *contract_term_months),
                project_name: project_name.clone(),
            },
        };
        let profile = EmployeeProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            hire_date,
            department_id: None,
        };
        Employee::new(id, profile, self.base_salary, kind)
    }
}

/// Prototypes configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PrototypesConfig {
    /// Template per variant.
    pub prototypes: BTreeMap<VariantTag, PrototypeTemplate>,
}

impl Default for PrototypesConfig {
    fn default() -> Self {
        let prototypes = [
            PrototypeTemplate::new(
                "FullTime",
                Decimal::from(5000),
                TemplateTerms::Salaried {
                    annual_leave_days: 20,
                },
            ),
            PrototypeTemplate::new(
                "PartTime",
                Decimal::from(3000),
                TemplateTerms::Hourly {
                    hours_per_week: 20,
                    hourly_rate: Decimal::new(150, 1),
                },
            ),
            PrototypeTemplate::new(
                "Contractor",
                Decimal::from(7000),
                TemplateTerms::Contract {
                    contract_term_months: 12,
                    project_name: "General Project".to_string(),
                },
            ),
        ]
        .into_iter()
        .map(|template| (template.terms.tag(), template))
        .collect();

        Self { prototypes }
    }
}

/// The complete company configuration.
///
/// Aggregates everything loaded from a configuration directory, or the
/// built-in defaults via [`CompanyConfig::default`].
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    company: CompanyMetadata,
    employee_defaults: EmployeeDefaults,
    departments: BTreeMap<String, DepartmentPreset>,
    prototypes: BTreeMap<VariantTag, PrototypeTemplate>,
}

impl CompanyConfig {
    /// Creates a CompanyConfig from its component parts.
    ///
    /// Department keys are normalised to lowercase.
    pub fn new(
        company: CompanyMetadata,
        employee_defaults: EmployeeDefaults,
        departments: BTreeMap<String, DepartmentPreset>,
        prototypes: BTreeMap<VariantTag, PrototypeTemplate>,
    ) -> Self {
        let departments = departments
            .into_iter()
            .map(|(key, preset)| (key.trim().to_lowercase(), preset))
            .collect();
        Self {
            company,
            employee_defaults,
            departments,
            prototypes,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns the employee defaults.
    pub fn employee_defaults(&self) -> &EmployeeDefaults {
        &self.employee_defaults
    }

    /// Returns all department presets keyed by lowercase type.
    pub fn departments(&self) -> &BTreeMap<String, DepartmentPreset> {
        &self.departments
    }

    /// Returns all prototype templates.
    pub fn prototypes(&self) -> &BTreeMap<VariantTag, PrototypeTemplate> {
        &self.prototypes
    }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self::new(
            CompanyMetadata::default(),
            EmployeeDefaults::default(),
            DepartmentsConfig::default().departments,
            PrototypesConfig::default().prototypes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_builtin_presets() {
        let config = CompanyConfig::default();
        assert_eq!(
            config.departments().keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["finance", "hr", "it", "operations", "sales"]
        );
        assert_eq!(config.prototypes().len(), 3);
        assert_eq!(config.company().email_domain, "company.com");
    }

    #[test]
    fn test_default_prototypes_match_their_keys() {
        for (tag, template) in PrototypesConfig::default().prototypes {
            assert_eq!(template.terms.tag(), tag);
        }
    }

    #[test]
    fn test_kind_for_contract_ends_after_term() {
        let defaults = EmployeeDefaults::default();
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        match defaults.kind_for(VariantTag::Contract, start) {
            EmployeeKind::Contract {
                contract_end_date,
                project_name,
            } => {
                assert_eq!(contract_end_date, NaiveDate::from_ymd_opt(2027, 1, 31).unwrap());
                assert_eq!(project_name, "General Project");
            }
            other => panic!("Expected contract terms, got {:?}", other),
        }
    }

    #[test]
    fn test_template_to_employee() {
        let template = &PrototypesConfig::default().prototypes[&VariantTag::Hourly];
        let hire_date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let employee = template.to_employee(0, hire_date);

        assert_eq!(employee.variant(), VariantTag::Hourly);
        assert_eq!(employee.first_name, "Prototype");
        assert_eq!(employee.hire_date, hire_date);
        assert_eq!(employee.calculate_salary(), Decimal::from(1200));
    }

    #[test]
    fn test_department_keys_are_normalised() {
        let mut departments = BTreeMap::new();
        departments.insert(
            " Legal ".to_string(),
            DepartmentPreset::new("Legal", "Counsel", "Building D"),
        );
        let config = CompanyConfig::new(
            CompanyMetadata::default(),
            EmployeeDefaults::default(),
            departments,
            BTreeMap::new(),
        );
        assert!(config.departments().contains_key("legal"));
    }
}
