use email_address::EmailAddress;
use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_EMAIL_LENGTH: usize = 5;
const MAX_EMAIL_LENGTH: usize = 254;

fn check_length(email: &str) -> Result<(), String> {
    if email.len() < MIN_EMAIL_LENGTH {
        return Err(format!(
            "Email must be at least {} characters",
            MIN_EMAIL_LENGTH
        ));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email must be less than {} characters",
            MAX_EMAIL_LENGTH
        ));
    }
    Ok(())
}

fn check_charset(email: &str) -> Result<(), String> {
    if email.chars().any(|c| c == ' ' || !c.is_ascii()) {
        return Err("Email must not contain spaces or non-ASCII characters".to_string());
    }
    Ok(())
}

fn check_shape(email: &str) -> Result<(), String> {
    if !EmailAddress::is_valid(email) {
        return Err("Email address is not valid".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let checks = [check_length, check_charset, check_shape];
    let errors: Vec<String> = checks
        .iter()
        .filter_map(|check| check(email).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(add_error("email.invalid", errors.join(", "), email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("rep@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_bad_addresses() {
        for bad in ["", "a@b", "no spaces@example.com", "missing-at.example.com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }
}
