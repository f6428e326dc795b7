pub mod api_response;
pub mod organization_response;
pub mod sale_response;
pub mod user_response;
pub mod workday_response;
