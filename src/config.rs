// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CatalogRepository, CostsRepository, HrRepository, IndirectCostRepository,
        LogisticsRepository, UserRepository,
    },
    services::{
        AuthService, CatalogService, CostingService, HrService, IndirectCostService,
        LogisticsService, ReportService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub hr_service: HrService,
    pub indirect_service: IndirectCostService,
    pub logistics_service: LogisticsService,
    pub costing_service: CostingService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let hr_repo = HrRepository::new(db_pool.clone());
        let indirect_repo = IndirectCostRepository::new(db_pool.clone());
        let logistics_repo = LogisticsRepository::new(db_pool.clone());
        let costs_repo = CostsRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let catalog_service = CatalogService::new(catalog_repo.clone());
        let hr_service = HrService::new(hr_repo.clone());
        let indirect_service = IndirectCostService::new(indirect_repo.clone());
        let logistics_service = LogisticsService::new(logistics_repo.clone());
        let costing_service = CostingService::new(
            catalog_repo.clone(),
            hr_repo,
            indirect_repo,
            logistics_repo,
            costs_repo.clone(),
            db_pool.clone(),
        );
        let report_service = ReportService::new(costs_repo, catalog_repo);

        Ok(Self {
            db_pool,
            auth_service,
            catalog_service,
            hr_service,
            indirect_service,
            logistics_service,
            costing_service,
            report_service,
        })
    }
}
