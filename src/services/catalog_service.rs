// src/services/catalog_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{BomEntry, BomItem, Sku, WarehouseItem},
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    // --- SKUs ---

    pub async fn create_sku(
        &self,
        code: &str,
        description: &str,
        package_weight_kg: Decimal,
        shelf_life_days: i32,
        suggested_price: Decimal,
        current_stock: Decimal,
    ) -> Result<Sku, AppError> {
        self.repo
            .create_sku(code, description, package_weight_kg, shelf_life_days, suggested_price, current_stock)
            .await
    }

    pub async fn get_all_skus(&self) -> Result<Vec<Sku>, AppError> {
        self.repo.get_all_skus().await
    }

    pub async fn get_sku(&self, id: i64) -> Result<Sku, AppError> {
        self.repo.find_sku(id).await?.ok_or(AppError::SkuNotFound)
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
    ) -> Result<Sku, AppError> {
        self.repo
            .update_sku(id, code, description, package_weight_kg, shelf_life_days, suggested_price, current_stock)
            .await?
            .ok_or(AppError::SkuNotFound)
    }

    // --- Ficha Técnica ---

    pub async fn add_bom_item(
        &self,
        sku_id: i64,
        warehouse_item_id: i64,
        quantity_per_unit: Decimal,
        unit: &str,
        wastage_percent: Decimal,
        optional: bool,
    ) -> Result<BomItem, AppError> {
        // O SKU e o item precisam existir no momento do cadastro.
        // (O item pode sumir depois; o motor de custos trata esse caso.)
        self.repo.find_sku(sku_id).await?.ok_or(AppError::SkuNotFound)?;
        self.repo
            .find_warehouse_item(warehouse_item_id)
            .await?
            .ok_or(AppError::WarehouseItemNotFound)?;

        self.repo
            .add_bom_item(sku_id, warehouse_item_id, quantity_per_unit, unit, wastage_percent, optional)
            .await
    }

    pub async fn get_bom(&self, sku_id: i64) -> Result<Vec<BomEntry>, AppError> {
        self.repo.find_sku(sku_id).await?.ok_or(AppError::SkuNotFound)?;
        self.repo.get_bom_entries(sku_id).await
    }

    pub async fn delete_bom_item(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repo.delete_bom_item(id).await?;
        if deleted == 0 {
            return Err(AppError::BomItemNotFound);
        }
        Ok(())
    }

    // --- Almoxarifado ---

    pub async fn create_warehouse_item(
        &self,
        code: &str,
        name: &str,
        unit: &str,
        unit_cost: Decimal,
        current_stock: Decimal,
    ) -> Result<WarehouseItem, AppError> {
        self.repo
            .create_warehouse_item(code, name, unit, unit_cost, current_stock)
            .await
    }

    pub async fn get_all_warehouse_items(&self) -> Result<Vec<WarehouseItem>, AppError> {
        self.repo.get_all_warehouse_items().await
    }

    pub async fn update_warehouse_item(
        &self,
        id: i64,
        code: &str,
        name: &str,
        unit: &str,
        unit_cost: Decimal,
        current_stock: Decimal,
    ) -> Result<WarehouseItem, AppError> {
        self.repo
            .update_warehouse_item(id, code, name, unit, unit_cost, current_stock)
            .await?
            .ok_or(AppError::WarehouseItemNotFound)
    }
}
