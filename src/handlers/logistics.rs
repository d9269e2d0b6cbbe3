// src/handlers/logistics.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::logistics::DestinationInput};

// POST /api/logistics/destinations
#[utoipa::path(
    post,
    path = "/api/logistics/destinations",
    tag = "Logistics",
    request_body = DestinationInput,
    responses(
        (status = 201, description = "Destino criado", body = crate::models::logistics::ShippingDestination),
        (status = 422, description = "Fórmula de frete inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_destination(
    State(app_state): State<AppState>,
    Json(payload): Json<DestinationInput>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let destination = app_state
        .logistics_service
        .create_destination(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(destination)))
}

// GET /api/logistics/destinations
#[utoipa::path(
    get,
    path = "/api/logistics/destinations",
    tag = "Logistics",
    responses(
        (status = 200, description = "Destinos de entrega", body = Vec<crate::models::logistics::ShippingDestination>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_destinations(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destinations = app_state.logistics_service.get_all_destinations().await?;
    Ok((StatusCode::OK, Json(destinations)))
}

// PUT /api/logistics/destinations/{id}
#[utoipa::path(
    put,
    path = "/api/logistics/destinations/{id}",
    tag = "Logistics",
    params(("id" = i64, Path, description = "ID do destino")),
    request_body = DestinationInput,
    responses(
        (status = 200, description = "Destino atualizado", body = crate::models::logistics::ShippingDestination),
        (status = 404, description = "Destino não encontrado"),
        (status = 422, description = "Fórmula de frete inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_destination(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DestinationInput>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let destination = app_state
        .logistics_service
        .update_destination(id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(destination)))
}
