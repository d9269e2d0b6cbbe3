// src/services/indirect_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::IndirectCostRepository,
    models::indirect::IndirectCost,
};

#[derive(Clone)]
pub struct IndirectCostService {
    repo: IndirectCostRepository,
}

impl IndirectCostService {
    pub fn new(repo: IndirectCostRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        period: &str,
        category: &str,
        description: Option<&str>,
        value: Decimal,
    ) -> Result<IndirectCost, AppError> {
        self.repo.create(period, category, description, value).await
    }

    pub async fn get_all(&self, period: Option<&str>) -> Result<Vec<IndirectCost>, AppError> {
        self.repo.get_all(period).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::IndirectCostNotFound);
        }
        Ok(())
    }
}
