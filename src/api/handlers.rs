//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::hiring::duplicate_employee;
use crate::models::{DepartmentId, Employee, EmployeeId, PayModifier, VariantTag};

use super::request::{
    CreateDepartmentRequest, CreateEmployeeRequest, DailyReportQuery, PrototypeRequest, SearchQuery,
    UpdateEmployeeRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CompensationResponse, EmployeeTotal, PayrollRunResponse,
    TotalsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route("/employees/from-prototype", post(create_from_prototype))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/duplicate", post(duplicate))
        .route("/employees/:id/modifiers", post(add_modifier))
        .route("/employees/:id/compensation", get(compensation))
        .route("/departments", post(create_department).get(list_departments))
        .route("/departments/:id", delete(delete_department))
        .route("/departments/:id/members/:employee_id", put(assign_member))
        .route("/payroll", delete(clear_payroll))
        .route("/payroll/totals", get(all_totals))
        .route("/payroll/totals/:employee_id", get(employee_total))
        .route("/payroll/report", get(payroll_report))
        .route("/payroll/report/daily", get(daily_report))
        .route("/payroll/:employee_id", post(process_payroll))
        .with_state(state)
}

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Logs a failed operation and turns it into an error response.
fn failure(correlation_id: Uuid, error: PayrollError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection(correlation_id: Uuid, rejected: JsonRejection) -> ApiErrorResponse {
    let error = match rejected {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn json<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn text(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

fn compensation_of(employee: &Employee) -> PayrollResult<CompensationResponse> {
    let breakdown = employee.salary_breakdown()?;
    Ok(CompensationResponse {
        employee_id: employee.id(),
        variant: employee.variant(),
        salary: breakdown.total,
        benefits: employee.benefits(),
        breakdown,
    })
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let Json(request) = payload.map_err(|err| rejection(correlation_id, err))?;
    let id = request
        .id
        .unwrap_or_else(|| state.directory().next_employee_id());

    let mut builder = state
        .employees()
        .builder(&request.employee_type, id, &request.first_name, &request.last_name)
        .map_err(|err| failure(correlation_id, err))?;
    if let Some(email) = request.email {
        builder = builder.email(email);
    }
    if let Some(phone_number) = request.phone_number {
        builder = builder.phone_number(phone_number);
    }
    if let Some(hire_date) = request.hire_date {
        builder = builder.hire_date(hire_date);
    }
    if let Some(department_id) = request.department_id {
        builder = builder.department(department_id);
    }
    if let Some(base_salary) = request.base_salary {
        builder = builder.base_salary(base_salary);
    }
    if let Some(days) = request.annual_leave_days {
        builder = builder.annual_leave_days(days);
    }
    if let Some(hours) = request.hours_per_week {
        builder = builder.hours_per_week(hours);
    }
    if let Some(rate) = request.hourly_rate {
        builder = builder.hourly_rate(rate);
    }
    if let Some(date) = request.contract_end_date {
        builder = builder.contract_end_date(date);
    }
    if let Some(project_name) = request.project_name {
        builder = builder.project_name(project_name);
    }
    let employee = request
        .modifiers
        .into_iter()
        .fold(builder, |builder, modifier| builder.modifier(modifier))
        .build();

    state
        .directory()
        .insert_employee(employee.clone())
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        variant = %employee.variant(),
        "Employee created"
    );
    Ok(json(StatusCode::CREATED, employee))
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employees = match query.search.as_deref() {
        Some(keyword) if !keyword.trim().is_empty() => state.directory().search_employees(keyword),
        _ => state.directory().list_employees(),
    };
    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Employees listed"
    );
    Ok(json(StatusCode::OK, employees))
}

/// Handler for GET /employees/:id.
async fn get_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employee = state
        .directory()
        .get_employee(id)
        .map_err(|err| failure(correlation_id, err))?;
    Ok(json(StatusCode::OK, employee))
}

/// Handler for PUT /employees/:id.
///
/// Edits contact details, base salary and department. A department change
/// moves the employee's membership in the directory.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Processing update employee request");

    let Json(request) = payload.map_err(|err| rejection(correlation_id, err))?;
    if request.remove_department && request.department_id.is_some() {
        warn!(correlation_id = %correlation_id, "Update both sets and removes the department");
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "department_id and remove_department cannot be combined",
        )));
    }

    let mut employee = state
        .directory()
        .get_employee(id)
        .map_err(|err| failure(correlation_id, err))?;
    if let Some(first_name) = request.first_name {
        employee.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        employee.last_name = last_name;
    }
    if let Some(email) = request.email {
        employee.email = email;
    }
    if let Some(phone_number) = request.phone_number {
        employee.phone_number = phone_number;
    }
    if let Some(base_salary) = request.base_salary {
        employee.base_salary = base_salary;
    }
    if request.remove_department {
        employee.department_id = None;
    } else if request.department_id.is_some() {
        employee.department_id = request.department_id;
    }

    // Never store an employee whose salary cannot be computed.
    employee
        .checked_salary()
        .map_err(|err| failure(correlation_id, err))?;
    state
        .directory()
        .update_employee(employee.clone())
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        department_id = ?employee.department_id,
        "Employee updated"
    );
    Ok(json(StatusCode::OK, employee))
}

/// Handler for DELETE /employees/:id.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employee = state
        .directory()
        .delete_employee(id)
        .map_err(|err| failure(correlation_id, err))?;
    info!(correlation_id = %correlation_id, employee_id = id, "Employee deleted");
    Ok(json(StatusCode::OK, employee))
}

/// Handler for POST /employees/from-prototype.
async fn create_from_prototype(
    State(state): State<AppState>,
    payload: Result<Json<PrototypeRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing prototype request");

    let Json(request) = payload.map_err(|err| rejection(correlation_id, err))?;
    let variant: VariantTag = request
        .employee_type
        .parse()
        .map_err(|err| failure(correlation_id, err))?;
    let id = request
        .id
        .unwrap_or_else(|| state.directory().next_employee_id());
    let email = request.email.unwrap_or_else(|| {
        format!(
            "{}.{}@{}",
            request.first_name.to_lowercase(),
            request.last_name.to_lowercase(),
            state.config().company().email_domain
        )
    });

    let employee = state
        .prototypes()
        .read()
        .clone_and_customize(
            variant,
            id,
            &request.first_name,
            &request.last_name,
            &email,
            request.department_id,
        )
        .map_err(|err| failure(correlation_id, err))?;
    state
        .directory()
        .insert_employee(employee.clone())
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        variant = %variant,
        "Employee cloned from prototype"
    );
    Ok(json(StatusCode::CREATED, employee))
}

/// Handler for POST /employees/:id/duplicate.
async fn duplicate(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let source = state
        .directory()
        .get_employee(id)
        .map_err(|err| failure(correlation_id, err))?;
    let copy = duplicate_employee(&source, state.directory().next_employee_id());
    state
        .directory()
        .insert_employee(copy.clone())
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        source_id = id,
        employee_id = copy.id(),
        "Employee duplicated"
    );
    Ok(json(StatusCode::CREATED, copy))
}

/// Handler for POST /employees/:id/modifiers.
///
/// Appends the modifier and returns the new compensation. A modifier that
/// would make the salary unrepresentable is refused and nothing is stored.
async fn add_modifier(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<PayModifier>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Json(modifier) = payload.map_err(|err| rejection(correlation_id, err))?;

    let mut employee = state
        .directory()
        .get_employee(id)
        .map_err(|err| failure(correlation_id, err))?;
    let kind = modifier.kind_name();
    employee.apply_modifier(modifier);
    let response = compensation_of(&employee).map_err(|err| failure(correlation_id, err))?;
    state
        .directory()
        .update_employee(employee)
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        modifier = kind,
        salary = %response.salary,
        "Pay modifier applied"
    );
    Ok(json(StatusCode::OK, response))
}

/// Handler for GET /employees/:id/compensation.
async fn compensation(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employee = state
        .directory()
        .get_employee(id)
        .map_err(|err| failure(correlation_id, err))?;
    let response = compensation_of(&employee).map_err(|err| failure(correlation_id, err))?;
    Ok(json(StatusCode::OK, response))
}

/// Handler for POST /departments.
async fn create_department(
    State(state): State<AppState>,
    payload: Result<Json<CreateDepartmentRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|err| rejection(correlation_id, err))?;
    let id = request
        .id
        .unwrap_or_else(|| state.directory().next_department_id());

    let department = match (request.department_type, request.name, request.manager_name, request.location) {
        (Some(department_type), ..) => state
            .departments()
            .create(&department_type, id)
            .map_err(|err| failure(correlation_id, err))?,
        (None, Some(name), Some(manager_name), Some(location)) => state
            .departments()
            .create_custom(id, &name, &manager_name, &location),
        _ => {
            warn!(correlation_id = %correlation_id, "Department request without type or fields");
            return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
                "either type or name, manager_name and location are required",
            )));
        }
    };

    state
        .directory()
        .insert_department(department.clone())
        .map_err(|err| failure(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        department_id = id,
        name = %department.name,
        "Department created"
    );
    Ok(json(StatusCode::CREATED, department))
}

/// Handler for GET /departments.
async fn list_departments(State(state): State<AppState>) -> HandlerResult {
    Ok(json(StatusCode::OK, state.directory().list_departments()))
}

/// Handler for DELETE /departments/:id.
async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let department = state
        .directory()
        .delete_department(id)
        .map_err(|err| failure(correlation_id, err))?;
    info!(correlation_id = %correlation_id, department_id = id, "Department deleted");
    Ok(json(StatusCode::OK, department))
}

/// Handler for PUT /departments/:id/members/:employee_id.
async fn assign_member(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(DepartmentId, EmployeeId)>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let employee = state
        .directory()
        .assign_department(employee_id, Some(id))
        .map_err(|err| failure(correlation_id, err))?;
    info!(
        correlation_id = %correlation_id,
        department_id = id,
        employee_id,
        "Employee assigned to department"
    );
    Ok(json(StatusCode::OK, employee))
}

/// Handler for POST /payroll/:employee_id.
async fn process_payroll(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id, "Processing payroll request");

    let employee = state
        .directory()
        .get_employee(employee_id)
        .map_err(|err| failure(correlation_id, err))?;
    let outcome = state
        .ledger()
        .process_payroll(&employee)
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id,
        processed = outcome.is_processed(),
        "Payroll request completed"
    );
    Ok(json(
        StatusCode::OK,
        PayrollRunResponse {
            employee_id,
            outcome,
        },
    ))
}

/// Handler for GET /payroll/totals.
async fn all_totals(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let ledger = state.ledger();
    let report = ledger
        .payroll_report()
        .map_err(|err| failure(correlation_id, err))?;
    let totals: Vec<EmployeeTotal> = report
        .lines
        .into_iter()
        .map(|line| EmployeeTotal {
            employee_id: line.employee_id,
            total_paid: line.amount,
            last_processed: ledger.last_processed(line.employee_id),
        })
        .collect();
    Ok(json(
        StatusCode::OK,
        TotalsResponse {
            totals,
            grand_total: report.grand_total,
        },
    ))
}

/// Handler for GET /payroll/totals/:employee_id.
///
/// Employees that were never processed report a zero total.
async fn employee_total(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> HandlerResult {
    let ledger = state.ledger();
    Ok(json(
        StatusCode::OK,
        EmployeeTotal {
            employee_id,
            total_paid: ledger.get_total_paid(employee_id),
            last_processed: ledger.last_processed(employee_id),
        },
    ))
}

/// Handler for GET /payroll/report.
async fn payroll_report(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let report = state
        .ledger()
        .generate_payroll_report()
        .map_err(|err| failure(correlation_id, err))?;
    Ok(text(report))
}

/// Handler for GET /payroll/report/daily.
async fn daily_report(
    State(state): State<AppState>,
    Query(query): Query<DailyReportQuery>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let ledger = state.ledger();
    let date = query.date.unwrap_or_else(|| ledger.today());
    let report = ledger
        .generate_daily_report(date)
        .map_err(|err| failure(correlation_id, err))?;
    Ok(text(report))
}

/// Handler for DELETE /payroll.
async fn clear_payroll(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clear payroll request");
    state.ledger().clear_records();
    Ok(StatusCode::NO_CONTENT.into_response())
}
