pub mod auth_routes;
pub mod organization_routes;
pub mod sale_routes;
pub mod workday_routes;
