// src/handlers/hr.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::hr::EmployeeInput};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEmployeesQuery {
    // true = somente funcionários ativos
    pub active: Option<bool>,
}

// POST /api/hr/employees
#[utoipa::path(
    post,
    path = "/api/hr/employees",
    tag = "HR",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Funcionário criado", body = crate::models::hr::Employee)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    Json(payload): Json<EmployeeInput>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let employee = app_state.hr_service.create_employee(&payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

// GET /api/hr/employees
#[utoipa::path(
    get,
    path = "/api/hr/employees",
    tag = "HR",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "Lista de funcionários", body = Vec<crate::models::hr::Employee>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_employees(
    State(app_state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let employees = app_state
        .hr_service
        .get_all_employees(query.active.unwrap_or(false))
        .await?;

    Ok((StatusCode::OK, Json(employees)))
}

// PUT /api/hr/employees/{id}
#[utoipa::path(
    put,
    path = "/api/hr/employees/{id}",
    tag = "HR",
    params(("id" = i64, Path, description = "ID do funcionário")),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Funcionário atualizado", body = crate::models::hr::Employee),
        (status = 404, description = "Funcionário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeInput>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let employee = app_state.hr_service.update_employee(id, &payload).await?;
    Ok((StatusCode::OK, Json(employee)))
}
