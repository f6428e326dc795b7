use actix_cors::Cors;
use actix_web::http::header;

use crate::constants::ALLOWED_ORIGIN;

pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin(ALLOWED_ORIGIN.as_str())
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
