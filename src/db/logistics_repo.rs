// src/db/logistics_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::logistics::{DestinationInput, ShippingDestination},
};

#[derive(Clone)]
pub struct LogisticsRepository {
    pool: PgPool,
}

impl LogisticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_destination(
        &self,
        input: &DestinationInput,
    ) -> Result<ShippingDestination, AppError> {
        let destination = sqlx::query_as::<_, ShippingDestination>(
            r#"
            INSERT INTO shipping_destinations (
                name, freight_kind, freight_value, freight_formula,
                icms_percent, icms_st_percent, pis_percent, cofins_percent, ipi_percent,
                active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.freight_kind)
        .bind(input.freight_value)
        .bind(&input.freight_formula)
        .bind(input.icms_percent)
        .bind(input.icms_st_percent)
        .bind(input.pis_percent)
        .bind(input.cofins_percent)
        .bind(input.ipi_percent)
        .bind(input.active)
        .fetch_one(&self.pool)
        .await?;

        Ok(destination)
    }

    pub async fn get_all_destinations(&self) -> Result<Vec<ShippingDestination>, AppError> {
        let destinations = sqlx::query_as::<_, ShippingDestination>(
            "SELECT * FROM shipping_destinations ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(destinations)
    }

    pub async fn find_destination(&self, id: i64) -> Result<Option<ShippingDestination>, AppError> {
        let destination = sqlx::query_as::<_, ShippingDestination>(
            "SELECT * FROM shipping_destinations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(destination)
    }

    pub async fn update_destination(
        &self,
        id: i64,
        input: &DestinationInput,
    ) -> Result<Option<ShippingDestination>, AppError> {
        let destination = sqlx::query_as::<_, ShippingDestination>(
            r#"
            UPDATE shipping_destinations
            SET name = $2, freight_kind = $3, freight_value = $4, freight_formula = $5,
                icms_percent = $6, icms_st_percent = $7, pis_percent = $8,
                cofins_percent = $9, ipi_percent = $10, active = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.freight_kind)
        .bind(input.freight_value)
        .bind(&input.freight_formula)
        .bind(input.icms_percent)
        .bind(input.icms_st_percent)
        .bind(input.pis_percent)
        .bind(input.cofins_percent)
        .bind(input.ipi_percent)
        .bind(input.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(destination)
    }
}
