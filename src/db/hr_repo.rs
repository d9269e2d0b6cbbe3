// src/db/hr_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::hr::{Employee, EmployeeInput},
};

#[derive(Clone)]
pub struct HrRepository {
    pool: PgPool,
}

impl HrRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (
                name, sector, position, base_salary, active,
                fgts_enabled, fgts_percent,
                inss_enabled, inss_percent,
                vacation_enabled, vacation_percent,
                vacation_bonus_enabled, vacation_bonus_percent,
                thirteenth_enabled, thirteenth_percent,
                rat_enabled, rat_percent,
                other_costs_enabled, other_costs_value
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(&input.sector)
        .bind(&input.position)
        .bind(input.base_salary)
        .bind(input.active)
        .bind(input.fgts_enabled)
        .bind(input.fgts_percent)
        .bind(input.inss_enabled)
        .bind(input.inss_percent)
        .bind(input.vacation_enabled)
        .bind(input.vacation_percent)
        .bind(input.vacation_bonus_enabled)
        .bind(input.vacation_bonus_percent)
        .bind(input.thirteenth_enabled)
        .bind(input.thirteenth_percent)
        .bind(input.rat_enabled)
        .bind(input.rat_percent)
        .bind(input.other_costs_enabled)
        .bind(input.other_costs_value)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn get_all_employees(&self, only_active: bool) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT * FROM employees
            WHERE ($1 = FALSE OR active = TRUE)
            ORDER BY name ASC
            "#,
        )
        .bind(only_active)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    // Pool de mão de obra do motor de custos: somente ativos
    pub async fn get_active_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.get_all_employees(true).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        input: &EmployeeInput,
    ) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $2, sector = $3, position = $4, base_salary = $5, active = $6,
                fgts_enabled = $7, fgts_percent = $8,
                inss_enabled = $9, inss_percent = $10,
                vacation_enabled = $11, vacation_percent = $12,
                vacation_bonus_enabled = $13, vacation_bonus_percent = $14,
                thirteenth_enabled = $15, thirteenth_percent = $16,
                rat_enabled = $17, rat_percent = $18,
                other_costs_enabled = $19, other_costs_value = $20,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.sector)
        .bind(&input.position)
        .bind(input.base_salary)
        .bind(input.active)
        .bind(input.fgts_enabled)
        .bind(input.fgts_percent)
        .bind(input.inss_enabled)
        .bind(input.inss_percent)
        .bind(input.vacation_enabled)
        .bind(input.vacation_percent)
        .bind(input.vacation_bonus_enabled)
        .bind(input.vacation_bonus_percent)
        .bind(input.thirteenth_enabled)
        .bind(input.thirteenth_percent)
        .bind(input.rat_enabled)
        .bind(input.rat_percent)
        .bind(input.other_costs_enabled)
        .bind(input.other_costs_value)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }
}
