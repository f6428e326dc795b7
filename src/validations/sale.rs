use validator::{ValidationError, ValidationErrors};

use crate::types::requests::sale::create_sale_request::CreateSaleRequest;
use crate::utils::validation_utils::add_error;

fn validate_customer_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(add_error(
            "sale.name",
            "Customer name must not be empty".to_string(),
            name,
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(add_error(
            "sale.price",
            "Price must be a non-negative number".to_string(),
            &price.to_string(),
        ));
    }
    Ok(())
}

pub fn validate_sale_data(data: &CreateSaleRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_customer_name(&data.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_price(data.price) {
        errors.add("price", e);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: f64) -> CreateSaleRequest {
        CreateSaleRequest {
            timeslot_id: "64b000000000000000000000".to_string(),
            name: name.to_string(),
            number: "555-0100".to_string(),
            address: "12 Elm Street".to_string(),
            price,
            details: String::new(),
        }
    }

    #[test]
    fn accepts_a_normal_sale() {
        assert!(validate_sale_data(&request("Pat Customer", 249.99)).is_ok());
    }

    #[test]
    fn rejects_blank_name_and_negative_price() {
        assert!(validate_sale_data(&request("", 10.0)).is_err());
        assert!(validate_sale_data(&request("Pat", -1.0)).is_err());
        assert!(validate_sale_data(&request("Pat", f64::NAN)).is_err());
    }
}
