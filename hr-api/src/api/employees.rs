//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::employee::EmployeeResponse;

use crate::state::AppState;

/// GET /employees/{email}
///
/// The path value goes to the service untouched: no format check, no trimming.
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .employees
        .find_by_email(&email)
        .await?
        .ok_or_else(|| employee_not_found(&email))?;
    Ok(Json(employee))
}

fn employee_not_found(email: &str) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeNotFound,
        format!("Employee with email {email} not found"),
    )
    .with_detail("email", email)
}
