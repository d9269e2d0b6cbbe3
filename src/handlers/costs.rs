// src/handlers/costs.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::costs::{AlertStatus, CalculateCostPayload, RecordStatus, SettingKind},
};

// ---
// Handler: calcular custo (a operação central do módulo)
// ---
#[utoipa::path(
    post,
    path = "/api/costs/calculate",
    tag = "Costs",
    request_body = CalculateCostPayload,
    responses(
        (status = 200, description = "Cálculo concluído (persistido quando saveRecord = true)",
            body = crate::services::costing_service::CostCalculationResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "SKU ou destino não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn calculate(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CalculateCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Validação acontece antes de qualquer leitura do banco
    payload.validate()?;

    let response = app_state
        .costing_service
        .calculate(Some(user.0.id), payload)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

// ---
// Registros de custo
// ---

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsQuery {
    pub period: Option<String>,
    pub sku_id: Option<i64>,
    pub status: Option<RecordStatus>,
}

// GET /api/costs/records
#[utoipa::path(
    get,
    path = "/api/costs/records",
    tag = "Costs",
    params(ListRecordsQuery),
    responses(
        (status = 200, description = "Registros de custo", body = Vec<crate::models::costs::CostRecord>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_records(
    State(app_state): State<AppState>,
    Query(query): Query<ListRecordsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let records = app_state
        .costing_service
        .get_records(query.period.as_deref(), query.sku_id, query.status)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

// GET /api/costs/records/{id}
#[utoipa::path(
    get,
    path = "/api/costs/records/{id}",
    tag = "Costs",
    params(("id" = i64, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro de custo", body = crate::models::costs::CostRecord),
        (status = 404, description = "Registro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_record(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let record = app_state.costing_service.get_record(id).await?;
    Ok((StatusCode::OK, Json(record)))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRecordPayload {
    pub status: RecordStatus,
}

// PATCH /api/costs/records/{id}/status
#[utoipa::path(
    patch,
    path = "/api/costs/records/{id}/status",
    tag = "Costs",
    params(("id" = i64, Path, description = "ID do registro")),
    request_body = TransitionRecordPayload,
    responses(
        (status = 200, description = "Status atualizado", body = crate::models::costs::CostRecord),
        (status = 404, description = "Registro não encontrado"),
        (status = 422, description = "Transição inválida ou registro fechado")
    ),
    security(("api_jwt" = []))
)]
pub async fn transition_record(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TransitionRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    let record = app_state
        .costing_service
        .transition_record(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

// DELETE /api/costs/records/{id}
#[utoipa::path(
    delete,
    path = "/api/costs/records/{id}",
    tag = "Costs",
    params(("id" = i64, Path, description = "ID do registro")),
    responses(
        (status = 204, description = "Registro removido"),
        (status = 404, description = "Registro não encontrado"),
        (status = 422, description = "Registro fechado não pode ser excluído")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_record(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.costing_service.delete_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Alertas
// ---

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAlertsQuery {
    pub status: Option<AlertStatus>,
}

// GET /api/costs/alerts
#[utoipa::path(
    get,
    path = "/api/costs/alerts",
    tag = "Costs",
    params(ListAlertsQuery),
    responses(
        (status = 200, description = "Alertas de variação de custo", body = Vec<crate::models::costs::CostAlert>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_alerts(
    State(app_state): State<AppState>,
    Query(query): Query<ListAlertsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let alerts = app_state.costing_service.get_alerts(query.status).await?;
    Ok((StatusCode::OK, Json(alerts)))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAlertStatusPayload {
    pub status: AlertStatus,
}

// PATCH /api/costs/alerts/{id}/status
#[utoipa::path(
    patch,
    path = "/api/costs/alerts/{id}/status",
    tag = "Costs",
    params(("id" = i64, Path, description = "ID do alerta")),
    request_body = UpdateAlertStatusPayload,
    responses(
        (status = 200, description = "Alerta atualizado", body = crate::models::costs::CostAlert),
        (status = 404, description = "Alerta não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_alert_status(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAlertStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let alert = app_state
        .costing_service
        .update_alert_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(alert)))
}

// ---
// Configurações
// ---

// GET /api/costs/settings
#[utoipa::path(
    get,
    path = "/api/costs/settings",
    tag = "Costs",
    responses(
        (status = 200, description = "Configurações de custo", body = Vec<crate::models::costs::CostSetting>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state.costing_service.get_settings().await?;
    Ok((StatusCode::OK, Json(settings)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingPayload {
    #[validate(length(min = 1, message = "O valor é obrigatório."))]
    pub value: String,

    pub kind: SettingKind,

    pub description: Option<String>,
}

// PUT /api/costs/settings/{key}
#[utoipa::path(
    put,
    path = "/api/costs/settings/{key}",
    tag = "Costs",
    params(("key" = String, Path, description = "Chave da configuração")),
    request_body = UpdateSettingPayload,
    responses(
        (status = 200, description = "Configuração gravada", body = crate::models::costs::CostSetting)
    ),
    security(("api_jwt" = []))
)]
pub async fn upsert_setting(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<UpdateSettingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let setting = app_state
        .costing_service
        .upsert_setting(&key, &payload.value, payload.kind, payload.description.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(setting)))
}
