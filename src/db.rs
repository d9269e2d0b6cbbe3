pub mod user_repo;
pub use user_repo::UserRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod hr_repo;
pub use hr_repo::HrRepository;
pub mod indirect_repo;
pub use indirect_repo::IndirectCostRepository;
pub mod logistics_repo;
pub use logistics_repo::LogisticsRepository;
pub mod costs_repo;
pub use costs_repo::CostsRepository;
