//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{
    CompanyConfig, CompanyMetadata, DepartmentPreset, DepartmentsConfig, EmployeeDefaults,
    PrototypesConfig,
};

/// Loads and provides access to company configuration.
///
/// # Directory Structure
///
/// ```text
/// config/acme/
/// ├── company.yaml            # Company name, email domain, default phone
/// ├── employee_defaults.yaml  # Default salary and variant terms
/// ├── departments.yaml        # Department presets by type
/// └── prototypes.yaml         # Prototype employee per variant
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/acme")?;
/// let it = loader.department_preset("IT")?;
/// println!("{} is in {}", it.name, it.location);
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let employee_defaults =
            Self::load_yaml::<EmployeeDefaults>(&path.join("employee_defaults.yaml"))?;
        let departments = Self::load_yaml::<DepartmentsConfig>(&path.join("departments.yaml"))?;
        let prototypes = Self::load_yaml::<PrototypesConfig>(&path.join("prototypes.yaml"))?;

        let config = CompanyConfig::new(
            company,
            employee_defaults,
            departments.departments,
            prototypes.prototypes,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CompanyConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the employee defaults.
    pub fn employee_defaults(&self) -> &EmployeeDefaults {
        self.config.employee_defaults()
    }

    /// Gets a department preset by type, case-insensitively.
    ///
    /// # Returns
    ///
    /// Returns the preset if found, or `InvalidDepartmentType` error.
    pub fn department_preset(&self, department_type: &str) -> PayrollResult<&DepartmentPreset> {
        self.config
            .departments()
            .get(&department_type.trim().to_lowercase())
            .ok_or_else(|| PayrollError::InvalidDepartmentType {
                department_type: department_type.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VariantTag;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/acme"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.company().name, "Acme Corporation");
        assert_eq!(loader.company().email_domain, "acme.example");
    }

    #[test]
    fn test_employee_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = loader.employee_defaults();

        assert_eq!(defaults.base_salary, dec("5000"));
        assert_eq!(defaults.hourly_rate, dec("15.00"));
        assert_eq!(defaults.contract_term_months, 12);
    }

    #[test]
    fn test_get_department_preset_case_insensitive() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let preset = loader.department_preset(" Finance ").unwrap();
        assert_eq!(preset.name, "Finance");
        assert_eq!(preset.location, "Building A, Floor 2");
    }

    #[test]
    fn test_get_department_preset_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.department_preset("legal") {
            Err(PayrollError::InvalidDepartmentType { department_type }) => {
                assert_eq!(department_type, "legal");
            }
            other => panic!("Expected InvalidDepartmentType error, got {:?}", other),
        }
    }

    #[test]
    fn test_prototypes_loaded_for_every_variant() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let prototypes = loader.config().prototypes();

        for tag in VariantTag::ALL {
            let template = prototypes.get(&tag).expect("missing prototype");
            assert_eq!(template.terms.tag(), tag);
        }
        assert_eq!(prototypes[&VariantTag::Contract].base_salary, dec("7000"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_uses_builtin_presets() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.department_preset("hr").unwrap().name, "Human Resources");
        assert_eq!(loader.company().email_domain, "company.com");
    }
}
