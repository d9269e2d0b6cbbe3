// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PeriodQuery {
    #[validate(custom(function = "crate::models::validate_period"))]
    pub period: String,
}

// GET /api/reports/period-closure
#[utoipa::path(
    get,
    path = "/api/reports/period-closure",
    tag = "Reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Fechamento consolidado do período",
            body = crate::services::report_service::PeriodClosureReport),
        (status = 400, description = "Período inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn period_closure(
    State(app_state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let report = app_state.report_service.period_closure(&query.period).await?;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/reports/period-closure/pdf
#[utoipa::path(
    get,
    path = "/api/reports/period-closure/pdf",
    tag = "Reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Fechamento do período em PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 400, description = "Período inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn period_closure_pdf(
    State(app_state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let bytes = app_state
        .report_service
        .period_closure_pdf(&query.period)
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        bytes,
    ))
}
