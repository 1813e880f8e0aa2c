//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ConfigLoader;
use crate::directory::{Directory, InMemoryDirectory};
use crate::error::PayrollResult;
use crate::hiring::{DepartmentFactory, EmployeeFactory, PrototypeRegistry};
use crate::payroll::{Clock, PayrollLedger, SystemClock};

/// Shared application state.
///
/// Holds the one payroll ledger, the directory, the loaded configuration and
/// the hiring helpers built from it. Every clone shares the same ledger and
/// directory.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    ledger: Arc<PayrollLedger>,
    directory: Arc<dyn Directory>,
    employees: EmployeeFactory,
    departments: DepartmentFactory,
    prototypes: Arc<RwLock<PrototypeRegistry>>,
}

impl AppState {
    /// Creates application state on the system clock with an empty
    /// in-memory directory.
    pub fn new(config: ConfigLoader) -> PayrollResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates application state whose ledger and hiring dates follow `clock`.
    pub fn with_clock(config: ConfigLoader, clock: Arc<dyn Clock>) -> PayrollResult<Self> {
        Self::with_parts(config, clock, Arc::new(InMemoryDirectory::new()))
    }

    /// Creates application state over an existing directory.
    ///
    /// # Errors
    ///
    /// Returns `PrototypeMismatch` if the configured prototypes file a
    /// template under the wrong employee type.
    pub fn with_parts(
        config: ConfigLoader,
        clock: Arc<dyn Clock>,
        directory: Arc<dyn Directory>,
    ) -> PayrollResult<Self> {
        let employees = EmployeeFactory::new(
            config.employee_defaults().clone(),
            config.company().clone(),
            Arc::clone(&clock),
        );
        let prototypes =
            PrototypeRegistry::with_templates(config.config().prototypes(), clock.today())?;
        Ok(Self {
            departments: DepartmentFactory::new(config.clone()),
            config: Arc::new(config),
            ledger: Arc::new(PayrollLedger::new(clock)),
            directory,
            employees,
            prototypes: Arc::new(RwLock::new(prototypes)),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll ledger.
    pub fn ledger(&self) -> &PayrollLedger {
        &self.ledger
    }

    /// Returns the employee and department directory.
    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }

    /// Returns the employee factory.
    pub fn employees(&self) -> &EmployeeFactory {
        &self.employees
    }

    /// Returns the department factory.
    pub fn departments(&self) -> &DepartmentFactory {
        &self.departments
    }

    /// Returns the prototype registry.
    pub fn prototypes(&self) -> &RwLock<PrototypeRegistry> {
        &self.prototypes
    }
}
