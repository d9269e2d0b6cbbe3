// src/services/costing_service.rs

use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    costing::engine::{self, BomLine, CostCalculation, CostInputs, ItemPrice},
    db::{CatalogRepository, CostsRepository, HrRepository, IndirectCostRepository, LogisticsRepository},
    models::costs::{
        AlertStatus, CalculateCostPayload, CostAlert, CostRecord, CostSetting, NewCostRecord,
        RecordStatus, SettingKind,
    },
};

// Resposta da operação de cálculo: o resultado completo do motor mais o
// registro/alerta persistidos (quando saveRecord = true)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostCalculationResponse {
    pub calculation: CostCalculation,
    pub record: Option<CostRecord>,
    pub alert: Option<CostAlert>,
}

#[derive(Clone)]
pub struct CostingService {
    catalog_repo: CatalogRepository,
    hr_repo: HrRepository,
    indirect_repo: IndirectCostRepository,
    logistics_repo: LogisticsRepository,
    costs_repo: CostsRepository,
    pool: PgPool,
}

impl CostingService {
    pub fn new(
        catalog_repo: CatalogRepository,
        hr_repo: HrRepository,
        indirect_repo: IndirectCostRepository,
        logistics_repo: LogisticsRepository,
        costs_repo: CostsRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            catalog_repo,
            hr_repo,
            indirect_repo,
            logistics_repo,
            costs_repo,
            pool,
        }
    }

    // --- CÁLCULO ---
    // Sequência: carrega dados mestres -> motor puro -> decisão de alerta ->
    // persistência atômica (registro + alerta na mesma transação).
    pub async fn calculate(
        &self,
        created_by: Option<Uuid>,
        input: CalculateCostPayload,
    ) -> Result<CostCalculationResponse, AppError> {
        // 1. Dados mestres. SKU e destino inexistentes abortam a operação
        // antes de qualquer escrita.
        let sku = self
            .catalog_repo
            .find_sku(input.sku_id)
            .await?
            .ok_or(AppError::SkuNotFound)?;

        let destination = match input.destination_id {
            Some(id) => Some(
                self.logistics_repo
                    .find_destination(id)
                    .await?
                    .ok_or(AppError::DestinationNotFound)?,
            ),
            None => None,
        };

        let bom_entries = self.catalog_repo.get_bom_entries(input.sku_id).await?;
        let employees = self.hr_repo.get_active_employees().await?;
        let indirect_entries = self.indirect_repo.get_by_period(&input.period).await?;

        // 2. Resolve as linhas da ficha técnica contra o almoxarifado.
        // Item nulo (JOIN sem correspondência) vira linha "skipped" no motor.
        let bom_lines = bom_entries
            .into_iter()
            .map(|e| BomLine {
                bom_item_id: e.id,
                warehouse_item_id: e.warehouse_item_id,
                quantity_per_unit: e.quantity_per_unit,
                item: match (e.item_code, e.item_name, e.item_unit_cost) {
                    (Some(code), Some(name), Some(unit_cost)) => {
                        Some(ItemPrice { code, name, unit_cost })
                    }
                    _ => None,
                },
            })
            .collect();

        let calculation = engine::calculate(CostInputs {
            sku: sku.clone(),
            period: input.period.clone(),
            quantity_produced: input.quantity_produced,
            wastage_percent: input.wastage_percent,
            selling_price: input.selling_price,
            bom_lines,
            employees,
            indirect_entries,
            destination,
        });

        // 3. Comparação unilateral contra o último registro confirmado
        let previous = self.costs_repo.latest_confirmed_for_sku(sku.id).await?;
        let threshold = self.costs_repo.get_alert_threshold().await?;
        let variance = engine::variance_decision(
            previous.map(|r| r.unit_cost),
            calculation.totals.unit_cost,
            threshold,
        );

        if !input.save_record {
            return Ok(CostCalculationResponse {
                calculation,
                record: None,
                alert: None,
            });
        }

        // 4. Persistência: registro + alerta são tudo-ou-nada
        let new_record = NewCostRecord {
            sku_id: sku.id,
            period: calculation.period.clone(),
            quantity_produced: calculation.quantity_produced,
            direct_cost: calculation.totals.direct_cost,
            labor_cost: calculation.totals.labor_cost,
            indirect_cost: calculation.totals.indirect_cost,
            freight_cost: calculation.totals.freight_cost,
            tax_cost: calculation.totals.tax_cost,
            wastage_percent: calculation.totals.wastage_percent,
            wastage_value: calculation.totals.wastage_value,
            subtotal: calculation.totals.subtotal,
            total_cost: calculation.totals.total_cost,
            unit_cost: calculation.totals.unit_cost,
            selling_price: calculation.totals.selling_price,
            gross_margin: calculation.totals.gross_margin,
            gross_margin_percent: calculation.totals.gross_margin_percent,
            direct_detail: serde_json::to_value(&calculation.direct.lines)
                .map_err(anyhow::Error::from)?,
            labor_detail: serde_json::to_value(&calculation.labor.entries)
                .map_err(anyhow::Error::from)?,
            indirect_detail: serde_json::to_value(&calculation.indirect.entries)
                .map_err(anyhow::Error::from)?,
            freight_detail: serde_json::to_value(&calculation.freight)
                .map_err(anyhow::Error::from)?,
            observations: input.observations.clone(),
            created_by,
        };

        let mut tx = self.pool.begin().await?;

        let record = self.costs_repo.insert_record(&mut *tx, &new_record).await?;

        let alert = match &variance {
            Some(v) => Some(
                self.costs_repo
                    .insert_alert(&mut *tx, record.id, sku.id, v)
                    .await?,
            ),
            None => None,
        };

        tx.commit().await?;

        if let Some(a) = &alert {
            tracing::info!(
                sku_id = a.sku_id,
                variation = %a.variation_percent,
                "Alerta de variação de custo gerado"
            );
        }

        Ok(CostCalculationResponse {
            calculation,
            record: Some(record),
            alert,
        })
    }

    // --- REGISTROS ---

    pub async fn get_records(
        &self,
        period: Option<&str>,
        sku_id: Option<i64>,
        status: Option<RecordStatus>,
    ) -> Result<Vec<CostRecord>, AppError> {
        self.costs_repo.get_records(period, sku_id, status).await
    }

    pub async fn get_record(&self, id: i64) -> Result<CostRecord, AppError> {
        self.costs_repo
            .find_record(id)
            .await?
            .ok_or(AppError::CostRecordNotFound)
    }

    // Transições sempre para frente: DRAFT -> CONFIRMED -> CLOSED
    pub async fn transition_record(
        &self,
        id: i64,
        target: RecordStatus,
    ) -> Result<CostRecord, AppError> {
        let record = self.get_record(id).await?;

        match record.status.next() {
            Some(next) if next == target => self
                .costs_repo
                .update_record_status(id, target)
                .await?
                .ok_or(AppError::CostRecordNotFound),
            _ if record.status == RecordStatus::Closed => Err(AppError::ClosedRecordImmutable),
            _ => Err(AppError::InvalidStatusTransition(
                record.status.as_str().to_string(),
                target.as_str().to_string(),
            )),
        }
    }

    // Registro fechado não pode ser excluído
    pub async fn delete_record(&self, id: i64) -> Result<(), AppError> {
        let record = self.get_record(id).await?;
        if record.status == RecordStatus::Closed {
            return Err(AppError::ClosedRecordImmutable);
        }

        self.costs_repo.delete_record(id).await?;
        Ok(())
    }

    // --- ALERTAS ---

    pub async fn get_alerts(&self, status: Option<AlertStatus>) -> Result<Vec<CostAlert>, AppError> {
        self.costs_repo.get_alerts(status).await
    }

    pub async fn update_alert_status(
        &self,
        id: i64,
        status: AlertStatus,
    ) -> Result<CostAlert, AppError> {
        self.costs_repo
            .update_alert_status(id, status)
            .await?
            .ok_or(AppError::CostAlertNotFound)
    }

    // --- CONFIGURAÇÕES ---

    pub async fn get_settings(&self) -> Result<Vec<CostSetting>, AppError> {
        self.costs_repo.get_all_settings().await
    }

    pub async fn upsert_setting(
        &self,
        key: &str,
        value: &str,
        kind: SettingKind,
        description: Option<&str>,
    ) -> Result<CostSetting, AppError> {
        self.costs_repo.upsert_setting(key, value, kind, description).await
    }
}
