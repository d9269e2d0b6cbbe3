// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::costing;
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Catalog ---
        handlers::catalog::create_sku,
        handlers::catalog::get_all_skus,
        handlers::catalog::get_sku,
        handlers::catalog::update_sku,
        handlers::catalog::add_bom_item,
        handlers::catalog::get_bom,
        handlers::catalog::delete_bom_item,
        handlers::catalog::create_warehouse_item,
        handlers::catalog::get_all_warehouse_items,
        handlers::catalog::update_warehouse_item,

        // --- HR ---
        handlers::hr::create_employee,
        handlers::hr::get_all_employees,
        handlers::hr::update_employee,

        // --- Indirect Costs ---
        handlers::indirect::create_indirect_cost,
        handlers::indirect::get_all_indirect_costs,
        handlers::indirect::delete_indirect_cost,

        // --- Logistics ---
        handlers::logistics::create_destination,
        handlers::logistics::get_all_destinations,
        handlers::logistics::update_destination,

        // --- Costs ---
        handlers::costs::calculate,
        handlers::costs::get_records,
        handlers::costs::get_record,
        handlers::costs::transition_record,
        handlers::costs::delete_record,
        handlers::costs::get_alerts,
        handlers::costs::update_alert_status,
        handlers::costs::get_settings,
        handlers::costs::upsert_setting,

        // --- Reports ---
        handlers::reports::period_closure,
        handlers::reports::period_closure_pdf,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Catalog ---
            models::catalog::Sku,
            models::catalog::BomItem,
            models::catalog::BomEntry,
            models::catalog::WarehouseItem,
            handlers::catalog::SkuPayload,
            handlers::catalog::AddBomItemPayload,
            handlers::catalog::WarehouseItemPayload,

            // --- HR ---
            models::hr::Employee,
            models::hr::EmployeeInput,

            // --- Indirect Costs ---
            models::indirect::IndirectCost,
            handlers::indirect::CreateIndirectCostPayload,

            // --- Logistics ---
            models::logistics::FreightKind,
            models::logistics::ShippingDestination,
            models::logistics::DestinationInput,

            // --- Costs ---
            models::costs::RecordStatus,
            models::costs::AlertDirection,
            models::costs::AlertStatus,
            models::costs::SettingKind,
            models::costs::CostRecord,
            models::costs::CostAlert,
            models::costs::CostSetting,
            models::costs::CalculateCostPayload,
            handlers::costs::TransitionRecordPayload,
            handlers::costs::UpdateAlertStatusPayload,
            handlers::costs::UpdateSettingPayload,

            // --- Motor de cálculo ---
            costing::engine::LineStatus,
            costing::engine::DirectCostLine,
            costing::engine::DirectCostBreakdown,
            costing::engine::LaborEntry,
            costing::engine::LaborBreakdown,
            costing::engine::IndirectEntry,
            costing::engine::IndirectBreakdown,
            costing::engine::TaxEntry,
            costing::engine::FreightTaxBreakdown,
            costing::engine::CostTotals,
            costing::engine::CostCalculation,
            costing::engine::VarianceAlert,
            services::costing_service::CostCalculationResponse,

            // --- Reports ---
            services::report_service::StatusCounts,
            services::report_service::PeriodTotals,
            services::report_service::SkuClosureSummary,
            services::report_service::PeriodClosureReport,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Catalog", description = "SKUs, Fichas Técnicas e Almoxarifado"),
        (name = "HR", description = "Funcionários e Encargos"),
        (name = "Indirect Costs", description = "Custos Indiretos Mensais"),
        (name = "Logistics", description = "Destinos de Entrega, Frete e Impostos"),
        (name = "Costs", description = "Cálculo de Custos, Registros e Alertas"),
        (name = "Reports", description = "Relatórios de Fechamento de Período")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
