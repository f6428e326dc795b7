pub mod auth_utils;
pub mod code_utils;
pub mod time_utils;
pub mod validation_utils;
