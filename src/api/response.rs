//! Response types for the payroll API.
//!
//! This module defines the JSON response bodies and the mapping from
//! [`PayrollError`] to HTTP error responses.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compensation::SalaryBreakdown;
use crate::error::PayrollError;
use crate::models::{EmployeeId, VariantTag};
use crate::payroll::PayrollOutcome;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            PayrollError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            PayrollError::DepartmentNotFound { .. } => {
                (StatusCode::NOT_FOUND, "DEPARTMENT_NOT_FOUND")
            }
            PayrollError::PrototypeNotFound { .. } => (StatusCode::NOT_FOUND, "PROTOTYPE_NOT_FOUND"),
            PayrollError::InvalidVariant { .. } => (StatusCode::BAD_REQUEST, "INVALID_EMPLOYEE_TYPE"),
            PayrollError::InvalidDepartmentType { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_DEPARTMENT_TYPE")
            }
            PayrollError::PrototypeMismatch { .. } => (StatusCode::BAD_REQUEST, "PROTOTYPE_MISMATCH"),
            PayrollError::DuplicateEmployee { .. } => (StatusCode::CONFLICT, "DUPLICATE_EMPLOYEE"),
            PayrollError::DuplicateDepartment { .. } => {
                (StatusCode::CONFLICT, "DUPLICATE_DEPARTMENT")
            }
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                return ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                };
            }
            PayrollError::CalculationError { .. } => {
                return ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CALCULATION_ERROR",
                        "Calculation failed",
                        message,
                    ),
                };
            }
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}

/// Salary, benefits and itemised breakdown for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationResponse {
    /// The employee.
    pub employee_id: EmployeeId,
    /// Variant of the employee.
    pub variant: VariantTag,
    /// Current payable salary.
    pub salary: Decimal,
    /// Benefits description.
    pub benefits: String,
    /// Itemised salary.
    pub breakdown: SalaryBreakdown,
}

/// Result of `POST /payroll/:employee_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    /// The employee the run was for.
    pub employee_id: EmployeeId,
    /// What the run did.
    #[serde(flatten)]
    pub outcome: PayrollOutcome,
}

/// Cumulative total for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeTotal {
    /// The employee.
    pub employee_id: EmployeeId,
    /// Total paid to date; zero if never processed.
    pub total_paid: Decimal,
    /// Date of the most recent run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_processed: Option<NaiveDate>,
}

/// Cumulative totals for every processed employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsResponse {
    /// One entry per processed employee, in id order.
    pub totals: Vec<EmployeeTotal>,
    /// Sum of all totals.
    pub grand_total: Decimal,
}
