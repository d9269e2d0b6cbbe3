// src/db/indirect_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{common::error::AppError, models::indirect::IndirectCost};

#[derive(Clone)]
pub struct IndirectCostRepository {
    pool: PgPool,
}

impl IndirectCostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        period: &str,
        category: &str,
        description: Option<&str>,
        value: Decimal,
    ) -> Result<IndirectCost, AppError> {
        let entry = sqlx::query_as::<_, IndirectCost>(
            r#"
            INSERT INTO indirect_costs (period, category, description, value)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(period)
        .bind(category)
        .bind(description)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    // Lista todos ou só os de um período
    pub async fn get_all(&self, period: Option<&str>) -> Result<Vec<IndirectCost>, AppError> {
        let entries = sqlx::query_as::<_, IndirectCost>(
            r#"
            SELECT * FROM indirect_costs
            WHERE ($1::TEXT IS NULL OR period = $1)
            ORDER BY period DESC, category ASC
            "#,
        )
        .bind(period)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    // Lançamentos de um período (entrada do agregador de indiretos)
    pub async fn get_by_period(&self, period: &str) -> Result<Vec<IndirectCost>, AppError> {
        self.get_all(Some(period)).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM indirect_costs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
