pub mod organization_repository;
pub mod sale_repository;
pub mod user_repository;
pub mod workday_repository;
