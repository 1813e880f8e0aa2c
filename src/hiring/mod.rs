//! Ways of creating employees and departments.
//!
//! This module contains the [`EmployeeFactory`] and [`DepartmentFactory`]
//! (creation from a type name), the [`EmployeeBuilder`] (step-by-step
//! construction) and the [`PrototypeRegistry`] (cloning of template
//! employees).

mod builder;
mod factory;
mod prototype;

pub use builder::EmployeeBuilder;
pub use factory::{DepartmentFactory, EmployeeFactory};
pub use prototype::{PrototypeRegistry, duplicate_employee};
