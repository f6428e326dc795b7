pub mod organization_service;
pub mod sale_service;
pub mod user_service;
pub mod workday_service;
