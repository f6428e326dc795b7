pub mod organization_model;
pub mod role;
pub mod sale_model;
pub mod user_model;
pub mod workday_model;
