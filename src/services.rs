pub mod auth;
pub mod catalog_service;
pub mod costing_service;
pub mod hr_service;
pub mod indirect_service;
pub mod logistics_service;
pub mod report_service;

pub use auth::AuthService;
pub use catalog_service::CatalogService;
pub use costing_service::CostingService;
pub use hr_service::HrService;
pub use indirect_service::IndirectCostService;
pub use logistics_service::LogisticsService;
pub use report_service::ReportService;
