// src/models/costs.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Status do registro de custo ---
// Ciclo de vida: DRAFT -> CONFIRMED -> CLOSED, sempre para frente.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "cost_record_status", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum RecordStatus {
    Draft,
    Confirmed,
    Closed,
}

impl RecordStatus {
    // Única transição válida a partir de cada status
    pub fn next(self) -> Option<RecordStatus> {
        match self {
            RecordStatus::Draft => Some(RecordStatus::Confirmed),
            RecordStatus::Confirmed => Some(RecordStatus::Closed),
            RecordStatus::Closed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Draft => "DRAFT",
            RecordStatus::Confirmed => "CONFIRMED",
            RecordStatus::Closed => "CLOSED",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "alert_direction", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertDirection {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "alert_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    New,
    Viewed,
    Resolved,
    Ignored,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "setting_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingKind {
    Number,
    Percent,
    Boolean,
    Json,
}

// --- Registro de Custo ---
// Saída imutável de uma rodada de cálculo. Os campos *_detail guardam o
// detalhamento por categoria serializado (JSONB).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub id: i64,
    pub sku_id: i64,
    pub period: String,
    pub quantity_produced: Decimal,

    pub direct_cost: Decimal,
    pub labor_cost: Decimal,
    pub indirect_cost: Decimal,
    pub freight_cost: Decimal,
    pub tax_cost: Decimal,
    pub wastage_percent: Decimal,
    pub wastage_value: Decimal,
    pub subtotal: Decimal,
    pub total_cost: Decimal,
    pub unit_cost: Decimal,
    pub selling_price: Decimal,
    pub gross_margin: Decimal,
    pub gross_margin_percent: Decimal,

    #[schema(value_type = Object)]
    pub direct_detail: serde_json::Value,
    #[schema(value_type = Object)]
    pub labor_detail: serde_json::Value,
    #[schema(value_type = Object)]
    pub indirect_detail: serde_json::Value,
    #[schema(value_type = Object)]
    pub freight_detail: serde_json::Value,

    pub observations: Option<String>,
    pub status: RecordStatus,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Alerta de Custo ---
// Gerado quando o custo unitário recém-calculado desvia do último registro
// CONFIRMED além do limite configurado.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostAlert {
    pub id: i64,
    pub cost_record_id: i64,
    pub sku_id: i64,
    pub previous_unit_cost: Decimal,
    pub current_unit_cost: Decimal,
    pub variation_percent: Decimal,
    pub threshold_percent: Decimal,
    pub direction: AlertDirection,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Configuração de Custo (chave/valor tipado) ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostSetting {
    pub key: String,
    pub value: String,
    pub kind: SettingKind,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// Dados de inserção de um registro de custo (montados pelo service a partir
// do resultado do motor de cálculo)
#[derive(Debug, Clone)]
pub struct NewCostRecord {
    pub sku_id: i64,
    pub period: String,
    pub quantity_produced: Decimal,
    pub direct_cost: Decimal,
    pub labor_cost: Decimal,
    pub indirect_cost: Decimal,
    pub freight_cost: Decimal,
    pub tax_cost: Decimal,
    pub wastage_percent: Decimal,
    pub wastage_value: Decimal,
    pub subtotal: Decimal,
    pub total_cost: Decimal,
    pub unit_cost: Decimal,
    pub selling_price: Decimal,
    pub gross_margin: Decimal,
    pub gross_margin_percent: Decimal,
    pub direct_detail: serde_json::Value,
    pub labor_detail: serde_json::Value,
    pub indirect_detail: serde_json::Value,
    pub freight_detail: serde_json::Value,
    pub observations: Option<String>,
    pub created_by: Option<Uuid>,
}

// Entrada da operação de cálculo de custo
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCostPayload {
    #[validate(range(min = 1, message = "O skuId deve ser um inteiro positivo."))]
    pub sku_id: i64,

    #[validate(custom(function = "crate::models::validate_period"))]
    pub period: String,

    #[validate(custom(function = "crate::models::validate_min_quantity"))]
    pub quantity_produced: Decimal,

    #[validate(range(min = 1, message = "O destinationId deve ser um inteiro positivo."))]
    pub destination_id: Option<i64>,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub wastage_percent: Decimal,

    // None => usa o preço sugerido do SKU
    pub selling_price: Option<Decimal>,

    pub observations: Option<String>,

    #[serde(default = "crate::models::default_true")]
    pub save_record: bool,
}

// Chave da configuração de limite de alerta e seu padrão
pub const ALERT_THRESHOLD_KEY: &str = "alert_threshold_percent";

pub fn default_alert_threshold() -> Decimal {
    Decimal::from(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transicao_de_status_sempre_para_frente() {
        assert_eq!(RecordStatus::Draft.next(), Some(RecordStatus::Confirmed));
        assert_eq!(RecordStatus::Confirmed.next(), Some(RecordStatus::Closed));
        // Registro fechado não tem próximo estado (nem volta atrás)
        assert_eq!(RecordStatus::Closed.next(), None);
    }
}
