// src/models/logistics.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Como o frete do destino é precificado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "freight_kind", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum FreightKind {
    FixedValue, // Vira "FIXED_VALUE"
    Formula,    // Vira "FORMULA"
}

// Destino de entrega com a regra de frete e as alíquotas fixas de impostos.
// A fórmula de frete referencia as variáveis peso/weight e valor/value e é
// avaliada pelo parser aritmético restrito (nunca por eval dinâmico).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDestination {
    pub id: i64,
    pub name: String,
    pub freight_kind: FreightKind,
    pub freight_value: Option<Decimal>,
    pub freight_formula: Option<String>,
    pub icms_percent: Decimal,
    pub icms_st_percent: Decimal,
    pub pis_percent: Decimal,
    pub cofins_percent: Decimal,
    pub ipi_percent: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de criação/atualização de destino.
// A consistência entre freight_kind e o campo correspondente (valor fixo ou
// fórmula) é validada no service, que também faz o parse da fórmula.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationInput {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub freight_kind: FreightKind,

    #[validate(custom(function = "crate::models::validate_not_negative"))]
    #[serde(default)]
    pub freight_value: Option<Decimal>,

    pub freight_formula: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub icms_percent: Decimal,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub icms_st_percent: Decimal,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub pis_percent: Decimal,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub cofins_percent: Decimal,

    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub ipi_percent: Decimal,

    #[serde(default = "crate::models::default_true")]
    pub active: bool,
}
