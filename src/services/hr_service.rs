// src/services/hr_service.rs

use crate::{
    common::error::AppError,
    db::HrRepository,
    models::hr::{Employee, EmployeeInput},
};

#[derive(Clone)]
pub struct HrService {
    repo: HrRepository,
}

impl HrService {
    pub fn new(repo: HrRepository) -> Self {
        Self { repo }
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, AppError> {
        self.repo.create_employee(input).await
    }

    pub async fn get_all_employees(&self, only_active: bool) -> Result<Vec<Employee>, AppError> {
        self.repo.get_all_employees(only_active).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        input: &EmployeeInput,
    ) -> Result<Employee, AppError> {
        self.repo
            .update_employee(id, input)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }
}
