//! HTTP API for the payroll engine.
//!
//! This module provides the REST endpoints for managing employees and
//! departments and for running payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateDepartmentRequest, CreateEmployeeRequest, PrototypeRequest, UpdateEmployeeRequest,
};
pub use response::{ApiError, CompensationResponse, PayrollRunResponse, TotalsResponse};
pub use state::AppState;
