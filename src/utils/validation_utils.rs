use serde_json::json;
use std::{borrow::Cow, collections::HashMap};
use validator::{ValidationError, ValidationErrors};

use crate::{
    errors::ApiError,
    types::requests::auth::{login_request::LoginRequest, register_request::RegisterRequest},
    validations::{email::validate_email, name::validate_name, password::validate_password},
};

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

pub fn to_api_error(errors: ValidationErrors, message: &str) -> ApiError {
    ApiError::validation(message, &errors)
}

pub fn validate_register_data(data: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(&data.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password(&data.password) {
        errors.add("password", e);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_login_data(data: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password(&data.password) {
        errors.add("password", e);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
