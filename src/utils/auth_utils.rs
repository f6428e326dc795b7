use actix_web::{
    FromRequest, HttpRequest,
    cookie::{Cookie, SameSite, time::Duration},
    dev::Payload,
    http::header,
};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use bson::oid::ObjectId;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::constants::{COOKIE_NAME, JWT_EXPIRY_HOURS, JWT_SECRET_KEY};
use crate::errors::ApiError;
use crate::models::user_model::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Hex-encoded user id.
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub fn generate_jwt(user: &User) -> Result<String, ApiError> {
    let user_id = user
        .id_hex()
        .ok_or_else(|| ApiError::Internal("User is missing an id".to_string()))?;

    let expiry = Utc::now() + chrono::Duration::hours(JWT_EXPIRY_HOURS);
    let claims = Claims {
        sub: user_id,
        email: user.email.clone(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET_KEY.as_bytes()),
    )
    .map_err(|err| ApiError::Internal(format!("JWT generation failed: {err}")))
}

pub fn decode_jwt(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET_KEY.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

pub fn verify_password(
    password: &str,
    hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn generate_cookie(token: String) -> Cookie<'static> {
    Cookie::build(COOKIE_NAME.clone(), token)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(Duration::hours(JWT_EXPIRY_HOURS))
        .finish()
}

pub fn expired_cookie() -> Cookie<'static> {
    Cookie::build(COOKIE_NAME.clone(), "")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(Duration::new(0, 0))
        .finish()
}

/// Extractor for the caller identified by a Bearer token or the auth cookie.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_authenticated_user(req))
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

fn extract_authenticated_user(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let token = bearer_token(req)
        .or_else(|| {
            req.cookie(COOKIE_NAME.as_str())
                .map(|cookie| cookie.value().to_string())
        })
        .ok_or_else(|| ApiError::Unauthorized("Missing authentication token".to_string()))?;

    let claims = decode_jwt(&token)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    let user_id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}
