use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("Name must not be empty".to_string());
    }
    if name.trim().len() < MIN_NAME_LENGTH {
        errors.push(format!(
            "Name must be at least {} characters long",
            MIN_NAME_LENGTH
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        errors.push(format!(
            "Name must be less than {} characters",
            MAX_NAME_LENGTH
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(add_error("name.invalid", errors.join(", "), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_names() {
        assert!(validate_name("Dana Doorman").is_ok());
    }

    #[test]
    fn rejects_empty_and_short_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
        assert!(validate_name("x").is_err());
    }
}
