pub mod auth_handler;
pub mod organization_handler;
pub mod sale_handler;
pub mod workday_handler;
