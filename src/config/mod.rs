//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load company configuration from
//! YAML files: company metadata, default employee terms, department presets
//! and prototype employees. [`ConfigLoader::default`] provides the built-in
//! presets when no configuration directory is available.
//!
//! # Example
//!
//! ```no_run
//! use staff_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/acme").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyConfig, CompanyMetadata, DepartmentPreset, DepartmentsConfig, EmployeeDefaults,
    PrototypeTemplate, PrototypesConfig, TemplateTerms,
};
