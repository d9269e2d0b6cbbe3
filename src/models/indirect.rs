// src/models/indirect.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Lançamento de custo indireto (energia, manutenção, limpeza...) atribuído
// a um período 'YYYY-MM'. Pode haver vários lançamentos por período e
// categoria; o motor soma todos os do período, sem rateio por SKU.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndirectCost {
    pub id: i64,
    pub period: String,
    pub category: String,
    pub description: Option<String>,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}
