// src/handlers/indirect.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndirectCostPayload {
    #[validate(custom(function = "crate::models::validate_period"))]
    pub period: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    pub description: Option<String>,

    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub value: Decimal,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIndirectCostsQuery {
    // Filtra por período 'YYYY-MM'
    pub period: Option<String>,
}

// POST /api/indirect-costs
#[utoipa::path(
    post,
    path = "/api/indirect-costs",
    tag = "Indirect Costs",
    request_body = CreateIndirectCostPayload,
    responses(
        (status = 201, description = "Lançamento criado", body = crate::models::indirect::IndirectCost)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_indirect_cost(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateIndirectCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = app_state
        .indirect_service
        .create(
            &payload.period,
            &payload.category,
            payload.description.as_deref(),
            payload.value,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

// GET /api/indirect-costs
#[utoipa::path(
    get,
    path = "/api/indirect-costs",
    tag = "Indirect Costs",
    params(ListIndirectCostsQuery),
    responses(
        (status = 200, description = "Lançamentos de custo indireto", body = Vec<crate::models::indirect::IndirectCost>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_indirect_costs(
    State(app_state): State<AppState>,
    Query(query): Query<ListIndirectCostsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let entries = app_state
        .indirect_service
        .get_all(query.period.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

// DELETE /api/indirect-costs/{id}
#[utoipa::path(
    delete,
    path = "/api/indirect-costs/{id}",
    tag = "Indirect Costs",
    params(("id" = i64, Path, description = "ID do lançamento")),
    responses(
        (status = 204, description = "Lançamento removido"),
        (status = 404, description = "Lançamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_indirect_cost(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.indirect_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
