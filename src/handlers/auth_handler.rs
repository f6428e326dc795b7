use actix_web::{HttpResponse, web};
use log::info;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::user_service::UserService,
    types::{
        requests::auth::{login_request::LoginRequest, register_request::RegisterRequest},
        responses::{
            api_response::ApiResponse,
            user_response::{LoginResponse, UserResponse},
        },
    },
    utils::{
        auth_utils::{expired_cookie, generate_cookie},
        validation_utils::{to_api_error, validate_login_data, validate_register_data},
    },
};

pub async fn register_user_handler(
    user_service: web::Data<Arc<UserService>>,
    new_user: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = new_user.into_inner();
    validate_register_data(&data)
        .map_err(|errors| to_api_error(errors, "Invalid registration data"))?;

    let user = user_service.register_user(data).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User successfully created.",
        UserResponse::from(&user),
    )))
}

pub async fn jwt_login_handler(
    user_service: web::Data<Arc<UserService>>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = credentials.into_inner();
    validate_login_data(&data)
        .map_err(|errors| to_api_error(errors, "Invalid login credentials"))?;

    let (user, token) = user_service
        .authenticate_user(&data.email, &data.password)
        .await?;
    info!("User {} successfully logged in.", data.email);

    let cookie = generate_cookie(token.clone());
    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        "Login successful",
        LoginResponse {
            token,
            user: UserResponse::from(&user),
        },
    )))
}

pub async fn logout_user_handler() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(expired_cookie())
        .json(ApiResponse::success(
            "Logged out successfully.",
            None::<()>,
        ))
}
