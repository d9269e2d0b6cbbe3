pub mod auth;
pub mod catalog;
pub mod costs;
pub mod hr;
pub mod indirect;
pub mod logistics;
pub mod reports;
