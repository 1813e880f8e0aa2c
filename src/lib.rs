//! Staff payroll engine.
//!
//! This crate models employee compensation (salaried, hourly and contract
//! employees, with bonus, overtime and certification pay modifiers layered
//! on top) and keeps a payroll ledger that pays each employee at most once
//! per calendar day.
//!
//! # Overview
//!
//! - [`models`]: employees, pay modifiers and departments
//! - [`compensation`]: salary and benefits derivation
//! - [`payroll`]: the payroll ledger, its clock and text reports
//! - [`hiring`]: factories, a builder and a prototype registry for new hires
//! - [`directory`]: employee and department records
//! - [`config`]: company configuration loaded from YAML
//! - [`api`]: the HTTP API
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use staff_payroll::hiring::EmployeeBuilder;
//! use staff_payroll::models::PayModifier;
//! use staff_payroll::payroll::{ManualClock, PayrollLedger};
//!
//! let clock = Arc::new(ManualClock::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
//! let ledger = PayrollLedger::new(clock);
//!
//! let employee = EmployeeBuilder::new(1, "Eyad", "Hesham")
//!     .base_salary(Decimal::from(6000))
//!     .modifier(PayModifier::bonus(Decimal::from(1000), "Performance"))
//!     .build();
//!
//! ledger.process_payroll(&employee)?;
//! assert_eq!(ledger.get_total_paid(1), Decimal::from(7000));
//! # Ok::<(), staff_payroll::error::PayrollError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod compensation;
pub mod config;
pub mod directory;
pub mod error;
pub mod hiring;
pub mod models;
pub mod payroll;
