pub mod auth;
pub mod organization;
pub mod sale;
pub mod workday;
