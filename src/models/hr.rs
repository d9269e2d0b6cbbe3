// src/models/hr.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Funcionário com a configuração de encargos trabalhistas.
// Invariante: cada percentual só entra no custo quando o seu toggle
// correspondente está habilitado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub sector: String,
    pub position: String,
    pub base_salary: Decimal,
    pub active: bool,

    // Encargos percentuais sobre o salário base
    pub fgts_enabled: bool,
    pub fgts_percent: Decimal,
    pub inss_enabled: bool,
    pub inss_percent: Decimal,
    pub vacation_enabled: bool,
    pub vacation_percent: Decimal,
    pub vacation_bonus_enabled: bool,
    pub vacation_bonus_percent: Decimal,
    pub thirteenth_enabled: bool,
    pub thirteenth_percent: Decimal,
    pub rat_enabled: bool,
    pub rat_percent: Decimal,

    // "Outros custos" é um valor fixo, não percentual
    pub other_costs_enabled: bool,
    pub other_costs_value: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de criação/atualização de funcionário
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O setor é obrigatório."))]
    pub sector: String,

    #[validate(length(min = 1, message = "O cargo é obrigatório."))]
    pub position: String,

    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub base_salary: Decimal,

    #[serde(default = "crate::models::default_true")]
    pub active: bool,

    #[serde(default)]
    pub fgts_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub fgts_percent: Decimal,

    #[serde(default)]
    pub inss_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub inss_percent: Decimal,

    #[serde(default)]
    pub vacation_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub vacation_percent: Decimal,

    #[serde(default)]
    pub vacation_bonus_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub vacation_bonus_percent: Decimal,

    #[serde(default)]
    pub thirteenth_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub thirteenth_percent: Decimal,

    #[serde(default)]
    pub rat_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub rat_percent: Decimal,

    #[serde(default)]
    pub other_costs_enabled: bool,
    #[serde(default)]
    #[validate(custom(function = "crate::models::validate_not_negative"))]
    pub other_costs_value: Decimal,
}
