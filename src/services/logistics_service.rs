// src/services/logistics_service.rs

use crate::{
    common::error::AppError,
    costing::formula,
    db::LogisticsRepository,
    models::logistics::{DestinationInput, FreightKind, ShippingDestination},
};

#[derive(Clone)]
pub struct LogisticsService {
    repo: LogisticsRepository,
}

impl LogisticsService {
    pub fn new(repo: LogisticsRepository) -> Self {
        Self { repo }
    }

    // Fórmula inválida é rejeitada no cadastro. Linhas antigas com fórmula
    // quebrada ainda degradam para frete zero na hora do cálculo.
    fn validate_freight_rule(input: &DestinationInput) -> Result<(), AppError> {
        if input.freight_kind == FreightKind::Formula {
            let raw = input
                .freight_formula
                .as_deref()
                .ok_or_else(|| AppError::InvalidFreightFormula("fórmula ausente".to_string()))?;
            formula::parse(raw)
                .map_err(|e| AppError::InvalidFreightFormula(e.to_string()))?;
        }
        Ok(())
    }

    pub async fn create_destination(
        &self,
        input: &DestinationInput,
    ) -> Result<ShippingDestination, AppError> {
        Self::validate_freight_rule(input)?;
        self.repo.create_destination(input).await
    }

    pub async fn get_all_destinations(&self) -> Result<Vec<ShippingDestination>, AppError> {
        self.repo.get_all_destinations().await
    }

    pub async fn update_destination(
        &self,
        id: i64,
        input: &DestinationInput,
    ) -> Result<ShippingDestination, AppError> {
        Self::validate_freight_rule(input)?;
        self.repo
            .update_destination(id, input)
            .await?
            .ok_or(AppError::DestinationNotFound)
    }
}
