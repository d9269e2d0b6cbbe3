// src/db/costs_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    costing::engine::VarianceAlert,
    models::costs::{
        AlertStatus, CostAlert, CostRecord, CostSetting, NewCostRecord, RecordStatus, SettingKind,
    },
};

#[derive(Clone)]
pub struct CostsRepository {
    pool: PgPool,
}

impl CostsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  REGISTROS DE CUSTO
    // =========================================================================

    // Recebe um executor para participar da transação registro + alerta
    pub async fn insert_record<'e, E>(
        &self,
        executor: E,
        record: &NewCostRecord,
    ) -> Result<CostRecord, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let created = sqlx::query_as::<_, CostRecord>(
            r#"
            INSERT INTO cost_records (
                sku_id, period, quantity_produced,
                direct_cost, labor_cost, indirect_cost, freight_cost, tax_cost,
                wastage_percent, wastage_value, subtotal, total_cost, unit_cost,
                selling_price, gross_margin, gross_margin_percent,
                direct_detail, labor_detail, indirect_detail, freight_detail,
                observations, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22)
            RETURNING *
            "#,
        )
        .bind(record.sku_id)
        .bind(&record.period)
        .bind(record.quantity_produced)
        .bind(record.direct_cost)
        .bind(record.labor_cost)
        .bind(record.indirect_cost)
        .bind(record.freight_cost)
        .bind(record.tax_cost)
        .bind(record.wastage_percent)
        .bind(record.wastage_value)
        .bind(record.subtotal)
        .bind(record.total_cost)
        .bind(record.unit_cost)
        .bind(record.selling_price)
        .bind(record.gross_margin)
        .bind(record.gross_margin_percent)
        .bind(&record.direct_detail)
        .bind(&record.labor_detail)
        .bind(&record.indirect_detail)
        .bind(&record.freight_detail)
        .bind(&record.observations)
        .bind(record.created_by)
        .fetch_one(executor)
        .await?;

        Ok(created)
    }

    // Último registro CONFIRMED do SKU (qualquer período), base da
    // comparação de variação
    pub async fn latest_confirmed_for_sku(
        &self,
        sku_id: i64,
    ) -> Result<Option<CostRecord>, AppError> {
        let record = sqlx::query_as::<_, CostRecord>(
            r#"
            SELECT * FROM cost_records
            WHERE sku_id = $1 AND status = 'CONFIRMED'
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(sku_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn get_records(
        &self,
        period: Option<&str>,
        sku_id: Option<i64>,
        status: Option<RecordStatus>,
    ) -> Result<Vec<CostRecord>, AppError> {
        let records = sqlx::query_as::<_, CostRecord>(
            r#"
            SELECT * FROM cost_records
            WHERE ($1::TEXT IS NULL OR period = $1)
              AND ($2::BIGINT IS NULL OR sku_id = $2)
              AND ($3::cost_record_status IS NULL OR status = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(period)
        .bind(sku_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn find_record(&self, id: i64) -> Result<Option<CostRecord>, AppError> {
        let record = sqlx::query_as::<_, CostRecord>("SELECT * FROM cost_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn update_record_status(
        &self,
        id: i64,
        status: RecordStatus,
    ) -> Result<Option<CostRecord>, AppError> {
        let record = sqlx::query_as::<_, CostRecord>(
            r#"
            UPDATE cost_records
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete_record(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM cost_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn get_records_by_period(&self, period: &str) -> Result<Vec<CostRecord>, AppError> {
        self.get_records(Some(period), None, None).await
    }

    // =========================================================================
    //  ALERTAS
    // =========================================================================

    pub async fn insert_alert<'e, E>(
        &self,
        executor: E,
        cost_record_id: i64,
        sku_id: i64,
        alert: &VarianceAlert,
    ) -> Result<CostAlert, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let created = sqlx::query_as::<_, CostAlert>(
            r#"
            INSERT INTO cost_alerts (
                cost_record_id, sku_id, previous_unit_cost, current_unit_cost,
                variation_percent, threshold_percent, direction
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(cost_record_id)
        .bind(sku_id)
        .bind(alert.previous_unit_cost)
        .bind(alert.current_unit_cost)
        .bind(alert.variation_percent)
        .bind(alert.threshold_percent)
        .bind(alert.direction)
        .fetch_one(executor)
        .await?;

        Ok(created)
    }

    pub async fn get_alerts(&self, status: Option<AlertStatus>) -> Result<Vec<CostAlert>, AppError> {
        let alerts = sqlx::query_as::<_, CostAlert>(
            r#"
            SELECT * FROM cost_alerts
            WHERE ($1::alert_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(alerts)
    }

    pub async fn update_alert_status(
        &self,
        id: i64,
        status: AlertStatus,
    ) -> Result<Option<CostAlert>, AppError> {
        let alert = sqlx::query_as::<_, CostAlert>(
            r#"
            UPDATE cost_alerts
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(alert)
    }

    // Alertas gerados por registros de um período (consumido pelo relatório
    // de fechamento)
    pub async fn get_alerts_by_record_period(
        &self,
        period: &str,
    ) -> Result<Vec<CostAlert>, AppError> {
        let alerts = sqlx::query_as::<_, CostAlert>(
            r#"
            SELECT a.* FROM cost_alerts a
            JOIN cost_records r ON r.id = a.cost_record_id
            WHERE r.period = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(period)
        .fetch_all(&self.pool)
        .await?;

        Ok(alerts)
    }

    // =========================================================================
    //  CONFIGURAÇÕES (chave/valor tipado)
    // =========================================================================

    pub async fn get_setting(&self, key: &str) -> Result<Option<CostSetting>, AppError> {
        let setting = sqlx::query_as::<_, CostSetting>("SELECT * FROM cost_settings WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(setting)
    }

    pub async fn get_all_settings(&self) -> Result<Vec<CostSetting>, AppError> {
        let settings = sqlx::query_as::<_, CostSetting>("SELECT * FROM cost_settings ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(settings)
    }

    // UPSERT (Insert or Update)
    pub async fn upsert_setting(
        &self,
        key: &str,
        value: &str,
        kind: SettingKind,
        description: Option<&str>,
    ) -> Result<CostSetting, AppError> {
        let setting = sqlx::query_as::<_, CostSetting>(
            r#"
            INSERT INTO cost_settings (key, value, kind, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (key)
            DO UPDATE SET
                value = EXCLUDED.value,
                kind = EXCLUDED.kind,
                description = COALESCE(EXCLUDED.description, cost_settings.description),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(kind)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }

    // Limite de variação para alerta, com fallback para o padrão quando a
    // configuração não existe ou não é numérica
    pub async fn get_alert_threshold(&self) -> Result<Decimal, AppError> {
        use crate::models::costs::{default_alert_threshold, ALERT_THRESHOLD_KEY};

        let threshold = self
            .get_setting(ALERT_THRESHOLD_KEY)
            .await?
            .and_then(|s| s.value.parse::<Decimal>().ok())
            .unwrap_or_else(default_alert_threshold);

        Ok(threshold)
    }
}
