// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState};

// ---
// Payload: SKU (criação e atualização usam o mesmo formato)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkuPayload {
    #[validate(length(min = 1, message = "O código é obrigatório."))]
    pub code: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub package_weight_kg: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, message = "A validade não pode ser negativa."))]
    pub shelf_life_days: i32,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub suggested_price: Decimal,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub current_stock: Decimal,
}

// POST /api/catalog/skus
#[utoipa::path(
    post,
    path = "/api/catalog/skus",
    tag = "Catalog",
    request_body = SkuPayload,
    responses(
        (status = 201, description = "SKU criado", body = crate::models::catalog::Sku),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_sku(
    State(app_state): State<AppState>,
    Json(payload): Json<SkuPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sku = app_state
        .catalog_service
        .create_sku(
            &payload.code,
            &payload.description,
            payload.package_weight_kg,
            payload.shelf_life_days,
            payload.suggested_price,
            payload.current_stock,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(sku)))
}

// GET /api/catalog/skus
#[utoipa::path(
    get,
    path = "/api/catalog/skus",
    tag = "Catalog",
    responses(
        (status = 200, description = "Lista de SKUs", body = Vec<crate::models::catalog::Sku>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_skus(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let skus = app_state.catalog_service.get_all_skus().await?;
    Ok((StatusCode::OK, Json(skus)))
}

// GET /api/catalog/skus/{id}
#[utoipa::path(
    get,
    path = "/api/catalog/skus/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "ID do SKU")),
    responses(
        (status = 200, description = "SKU encontrado", body = crate::models::catalog::Sku),
        (status = 404, description = "SKU não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_sku(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let sku = app_state.catalog_service.get_sku(id).await?;
    Ok((StatusCode::OK, Json(sku)))
}

// PUT /api/catalog/skus/{id}
#[utoipa::path(
    put,
    path = "/api/catalog/skus/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "ID do SKU")),
    request_body = SkuPayload,
    responses(
        (status = 200, description = "SKU atualizado", body = crate::models::catalog::Sku),
        (status = 404, description = "SKU não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_sku(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SkuPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sku = app_state
        .catalog_service
        .update_sku(
            id,
            &payload.code,
            &payload.description,
            payload.package_weight_kg,
            payload.shelf_life_days,
            payload.suggested_price,
            payload.current_stock,
        )
        .await?;

    Ok((StatusCode::OK, Json(sku)))
}

// ---
// Payload: linha da ficha técnica
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBomItemPayload {
    #[validate(range(min = 1, message = "O warehouseItemId deve ser um inteiro positivo."))]
    pub warehouse_item_id: i64,

    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub quantity_per_unit: Decimal,

    #[validate(length(min = 1, message = "A unidade é obrigatória."))]
    pub unit: String,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub wastage_percent: Decimal,

    #[serde(default)]
    pub optional: bool,
}

// POST /api/catalog/skus/{id}/bom
#[utoipa::path(
    post,
    path = "/api/catalog/skus/{id}/bom",
    tag = "Catalog",
    params(("id" = i64, Path, description = "ID do SKU")),
    request_body = AddBomItemPayload,
    responses(
        (status = 201, description = "Linha adicionada à ficha técnica", body = crate::models::catalog::BomItem),
        (status = 404, description = "SKU ou item de almoxarifado não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_bom_item(
    State(app_state): State<AppState>,
    Path(sku_id): Path<i64>,
    Json(payload): Json<AddBomItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .catalog_service
        .add_bom_item(
            sku_id,
            payload.warehouse_item_id,
            payload.quantity_per_unit,
            &payload.unit,
            payload.wastage_percent,
            payload.optional,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// GET /api/catalog/skus/{id}/bom
#[utoipa::path(
    get,
    path = "/api/catalog/skus/{id}/bom",
    tag = "Catalog",
    params(("id" = i64, Path, description = "ID do SKU")),
    responses(
        (status = 200, description = "Ficha técnica do SKU", body = Vec<crate::models::catalog::BomEntry>),
        (status = 404, description = "SKU não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_bom(
    State(app_state): State<AppState>,
    Path(sku_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let entries = app_state.catalog_service.get_bom(sku_id).await?;
    Ok((StatusCode::OK, Json(entries)))
}

// DELETE /api/catalog/bom/{item_id}
#[utoipa::path(
    delete,
    path = "/api/catalog/bom/{item_id}",
    tag = "Catalog",
    params(("item_id" = i64, Path, description = "ID da linha da ficha técnica")),
    responses(
        (status = 204, description = "Linha removida"),
        (status = 404, description = "Linha não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_bom_item(
    State(app_state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_bom_item(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Payload: item de almoxarifado
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseItemPayload {
    #[validate(length(min = 1, message = "O código é obrigatório."))]
    pub code: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A unidade é obrigatória."))]
    pub unit: String,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub unit_cost: Decimal,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub current_stock: Decimal,
}

// POST /api/catalog/warehouse-items
#[utoipa::path(
    post,
    path = "/api/catalog/warehouse-items",
    tag = "Catalog",
    request_body = WarehouseItemPayload,
    responses(
        (status = 201, description = "Item criado", body = crate::models::catalog::WarehouseItem),
        (status = 409, description = "Código já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_warehouse_item(
    State(app_state): State<AppState>,
    Json(payload): Json<WarehouseItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .catalog_service
        .create_warehouse_item(
            &payload.code,
            &payload.name,
            &payload.unit,
            payload.unit_cost,
            payload.current_stock,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// GET /api/catalog/warehouse-items
#[utoipa::path(
    get,
    path = "/api/catalog/warehouse-items",
    tag = "Catalog",
    responses(
        (status = 200, description = "Itens de almoxarifado", body = Vec<crate::models::catalog::WarehouseItem>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_warehouse_items(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.catalog_service.get_all_warehouse_items().await?;
    Ok((StatusCode::OK, Json(items)))
}

// PUT /api/catalog/warehouse-items/{id}
#[utoipa::path(
    put,
    path = "/api/catalog/warehouse-items/{id}",
    tag = "Catalog",
    params(("id" = i64, Path, description = "ID do item")),
    request_body = WarehouseItemPayload,
    responses(
        (status = 200, description = "Item atualizado", body = crate::models::catalog::WarehouseItem),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_warehouse_item(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WarehouseItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .catalog_service
        .update_warehouse_item(
            id,
            &payload.code,
            &payload.name,
            &payload.unit,
            payload.unit_cost,
            payload.current_stock,
        )
        .await?;

    Ok((StatusCode::OK, Json(item)))
}
