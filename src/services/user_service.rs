use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{ApiError, is_duplicate_key_error},
    models::user_model::User,
    repositories::user_repository::UserRepository,
    types::requests::auth::register_request::RegisterRequest,
    utils::auth_utils::{generate_jwt, hash_password, verify_password},
};

pub struct UserService {
    user_repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn register_user(&self, data: RegisterRequest) -> Result<User, ApiError> {
        if self
            .user_repository
            .find_by_email(&data.email)
            .await?
            .is_some()
        {
            return Err(ApiError::bad_request("Email already registered"));
        }

        let hashed_password = hash_password(&data.password)
            .map_err(|err| ApiError::Internal(format!("Password hashing failed: {err}")))?;

        let now = Utc::now();
        let user = User {
            _id: None,
            name: data.name,
            email: data.email,
            password: hashed_password,
            organization_id: None,
            created_at: now,
            updated_at: now,
        };

        match self.user_repository.create_user(user).await {
            Ok(created) => Ok(created),
            // The unique index closes the check-then-insert window.
            Err(err) if is_duplicate_key_error(&err) => {
                Err(ApiError::bad_request("Email already registered"))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, String), ApiError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let verified = verify_password(password, &user.password)
            .map_err(|err| ApiError::Internal(format!("Password verification failed: {err}")))?;
        if !verified {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = generate_jwt(&user)?;
        Ok((user, token))
    }
}
