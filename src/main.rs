// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod costing;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rota do usuário autenticado
    let me_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let catalog_routes = Router::new()
        .route("/skus"
               , post(handlers::catalog::create_sku)
               .get(handlers::catalog::get_all_skus)
        )
        .route("/skus/{id}"
               , get(handlers::catalog::get_sku)
               .put(handlers::catalog::update_sku)
        )
        .route("/skus/{id}/bom"
               , post(handlers::catalog::add_bom_item)
               .get(handlers::catalog::get_bom)
        )
        .route("/bom/{item_id}"
               , delete(handlers::catalog::delete_bom_item)
        )
        .route("/warehouse-items"
               , post(handlers::catalog::create_warehouse_item)
               .get(handlers::catalog::get_all_warehouse_items)
        )
        .route("/warehouse-items/{id}"
               , put(handlers::catalog::update_warehouse_item)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let hr_routes = Router::new()
        .route("/employees"
               , post(handlers::hr::create_employee)
               .get(handlers::hr::get_all_employees)
        )
        .route("/employees/{id}"
               , put(handlers::hr::update_employee)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let indirect_routes = Router::new()
        .route("/"
               , post(handlers::indirect::create_indirect_cost)
               .get(handlers::indirect::get_all_indirect_costs)
        )
        .route("/{id}"
               , delete(handlers::indirect::delete_indirect_cost)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let logistics_routes = Router::new()
        .route("/destinations"
               , post(handlers::logistics::create_destination)
               .get(handlers::logistics::get_all_destinations)
        )
        .route("/destinations/{id}"
               , put(handlers::logistics::update_destination)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let costs_routes = Router::new()
        .route("/calculate", post(handlers::costs::calculate))
        .route("/records", get(handlers::costs::get_records))
        .route("/records/{id}"
               , get(handlers::costs::get_record)
               .delete(handlers::costs::delete_record)
        )
        .route("/records/{id}/status", patch(handlers::costs::transition_record))
        .route("/alerts", get(handlers::costs::get_alerts))
        .route("/alerts/{id}/status", patch(handlers::costs::update_alert_status))
        .route("/settings", get(handlers::costs::get_settings))
        .route("/settings/{key}", put(handlers::costs::upsert_setting))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let report_routes = Router::new()
        .route("/period-closure", get(handlers::reports::period_closure))
        .route("/period-closure/pdf", get(handlers::reports::period_closure_pdf))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", me_routes)
        .nest("/api/catalog", catalog_routes)
        .nest("/api/hr", hr_routes)
        .nest("/api/indirect-costs", indirect_routes)
        .nest("/api/logistics", logistics_routes)
        .nest("/api/costs", costs_routes)
        .nest("/api/reports", report_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
