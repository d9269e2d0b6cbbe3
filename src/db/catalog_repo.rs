// src/db/catalog_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::catalog::{BomEntry, BomItem, Sku, WarehouseItem},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  SKUs (produtos acabados)
    // =========================================================================

    pub async fn create_sku(
        &self,
        code: &str,
        description: &str,
        package_weight_kg: Decimal,
        shelf_life_days: i32,
        suggested_price: Decimal,
        current_stock: Decimal,
    ) -> Result<Sku, AppError> {
        let sku = sqlx::query_as::<_, Sku>(
            r#"
            INSERT INTO skus (code, description, package_weight_kg, shelf_life_days, suggested_price, current_stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(code)
        .bind(description)
        .bind(package_weight_kg)
        .bind(shelf_life_days)
        .bind(suggested_price)
        .bind(current_stock)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateCode(code.to_string());
                }
            }
            e.into()
        })?;

        Ok(sku)
    }

    pub async fn get_all_skus(&self) -> Result<Vec<Sku>, AppError> {
        let skus = sqlx::query_as::<_, Sku>("SELECT * FROM skus ORDER BY code ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(skus)
    }

    pub async fn find_sku(&self, id: i64) -> Result<Option<Sku>, AppError> {
        let sku = sqlx::query_as::<_, Sku>("SELECT * FROM skus WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sku)
    }

    pub async fn update_sku(
        &self,
        id: i64,
        code: &str,
        description: &str,
        package_weight_kg: Decimal,
        shelf_life_days: i32,
        suggested_price: Decimal,
        current_stock: Decimal,
    ) -> Result<Option<Sku>, AppError> {
        let sku = sqlx::query_as::<_, Sku>(
            r#"
            UPDATE skus
            SET code = $2, description = $3, package_weight_kg = $4,
                shelf_life_days = $5, suggested_price = $6, current_stock = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(code)
        .bind(description)
        .bind(package_weight_kg)
        .bind(shelf_life_days)
        .bind(suggested_price)
        .bind(current_stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateCode(code.to_string());
                }
            }
            e.into()
        })?;

        Ok(sku)
    }

    // =========================================================================
    //  Ficha Técnica (BOM)
    // =========================================================================

    pub async fn add_bom_item(
        &self,
        sku_id: i64,
        warehouse_item_id: i64,
        quantity_per_unit: Decimal,
        unit: &str,
        wastage_percent: Decimal,
        optional: bool,
    ) -> Result<BomItem, AppError> {
        let item = sqlx::query_as::<_, BomItem>(
            r#"
            INSERT INTO bom_items (sku_id, warehouse_item_id, quantity_per_unit, unit, wastage_percent, optional)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(sku_id)
        .bind(warehouse_item_id)
        .bind(quantity_per_unit)
        .bind(unit)
        .bind(wastage_percent)
        .bind(optional)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    // Linhas da ficha técnica com o item de almoxarifado junto.
    // LEFT JOIN: a linha pode apontar para um item que já não existe,
    // e nesse caso os campos do item vêm nulos.
    pub async fn get_bom_entries(&self, sku_id: i64) -> Result<Vec<BomEntry>, AppError> {
        let entries = sqlx::query_as::<_, BomEntry>(
            r#"
            SELECT
                b.id, b.warehouse_item_id, b.quantity_per_unit, b.unit,
                b.wastage_percent, b.optional,
                w.code AS item_code,
                w.name AS item_name,
                w.unit_cost AS item_unit_cost
            FROM bom_items b
            LEFT JOIN warehouse_items w ON w.id = b.warehouse_item_id
            WHERE b.sku_id = $1
            ORDER BY b.id ASC
            "#,
        )
        .bind(sku_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn delete_bom_item(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM bom_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  Itens de Almoxarifado (matéria-prima / embalagem)
    // =========================================================================

    pub async fn create_warehouse_item(
        &self,
        code: &str,
        name: &str,
        unit: &str,
        unit_cost: Decimal,
        current_stock: Decimal,
    ) -> Result<WarehouseItem, AppError> {
        let item = sqlx::query_as::<_, WarehouseItem>(
            r#"
            INSERT INTO warehouse_items (code, name, unit, unit_cost, current_stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(unit)
        .bind(unit_cost)
        .bind(current_stock)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateCode(code.to_string());
                }
            }
            e.into()
        })?;

        Ok(item)
    }

    pub async fn get_all_warehouse_items(&self) -> Result<Vec<WarehouseItem>, AppError> {
        let items =
            sqlx::query_as::<_, WarehouseItem>("SELECT * FROM warehouse_items ORDER BY code ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(items)
    }

    pub async fn find_warehouse_item(&self, id: i64) -> Result<Option<WarehouseItem>, AppError> {
        let item = sqlx::query_as::<_, WarehouseItem>("SELECT * FROM warehouse_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    pub async fn update_warehouse_item(
        &self,
        id: i64,
        code: &str,
        name: &str,
        unit: &str,
        unit_cost: Decimal,
        current_stock: Decimal,
    ) -> Result<Option<WarehouseItem>, AppError> {
        let item = sqlx::query_as::<_, WarehouseItem>(
            r#"
            UPDATE warehouse_items
            SET code = $2, name = $3, unit = $4, unit_cost = $5, current_stock = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(code)
        .bind(name)
        .bind(unit)
        .bind(unit_cost)
        .bind(current_stock)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
