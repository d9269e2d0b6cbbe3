// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- 1. SKU (produto acabado) ---
// O catálogo de produtos vendáveis. Tudo que o motor de custos precifica
// referencia uma linha desta tabela.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    pub id: i64,
    pub code: String,
    pub description: String,
    pub package_weight_kg: Decimal,
    pub shelf_life_days: i32,
    pub suggested_price: Decimal,
    pub current_stock: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- 2. Ficha Técnica (BOM) ---
// Uma linha de insumo/embalagem pertencente a um SKU.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BomItem {
    pub id: i64,
    pub sku_id: i64,
    pub warehouse_item_id: i64,
    pub quantity_per_unit: Decimal,
    pub unit: String,
    pub wastage_percent: Decimal,
    pub optional: bool,
    pub created_at: DateTime<Utc>,
}

// Linha da ficha técnica com os dados do item de almoxarifado juntos (JOIN).
// Os campos do item são opcionais: a linha pode apontar para um item que já
// não existe no almoxarifado.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BomEntry {
    pub id: i64,
    pub warehouse_item_id: i64,
    pub quantity_per_unit: Decimal,
    pub unit: String,
    pub wastage_percent: Decimal,
    pub optional: bool,
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub item_unit_cost: Option<Decimal>,
}

// --- 3. Item de Almoxarifado (matéria-prima / embalagem) ---
// Fonte de preço do cálculo de custo direto. O ciclo de reposição fica no
// módulo de recebimento, fora deste serviço.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseItem {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub unit: String,
    pub unit_cost: Decimal,
    pub current_stock: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
