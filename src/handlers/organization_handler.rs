use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::organization_service::OrganizationService,
    types::{
        requests::organization::{
            create_organization_request::CreateOrganizationRequest,
            join_organization_request::JoinOrganizationRequest,
            update_member_role_request::UpdateMemberRoleRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::auth_utils::AuthenticatedUser,
};

pub async fn create_organization_handler(
    user: AuthenticatedUser,
    organization_service: web::Data<Arc<OrganizationService>>,
    payload: web::Json<CreateOrganizationRequest>,
) -> Result<HttpResponse, ApiError> {
    let organization = organization_service
        .create_organization(&user, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Organization created successfully.",
        organization,
    )))
}

pub async fn join_organization_handler(
    user: AuthenticatedUser,
    organization_service: web::Data<Arc<OrganizationService>>,
    payload: web::Json<JoinOrganizationRequest>,
) -> Result<HttpResponse, ApiError> {
    let organization = organization_service
        .join_organization(&user, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Joined organization successfully.",
        organization,
    )))
}

pub async fn get_organization_handler(
    user: AuthenticatedUser,
    organization_service: web::Data<Arc<OrganizationService>>,
) -> Result<HttpResponse, ApiError> {
    let organization = organization_service.get_organization(&user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Organization fetched successfully.",
        organization,
    )))
}

pub async fn update_member_role_handler(
    user: AuthenticatedUser,
    organization_service: web::Data<Arc<OrganizationService>>,
    target_user_id: web::Path<String>,
    payload: web::Json<UpdateMemberRoleRequest>,
) -> Result<HttpResponse, ApiError> {
    organization_service
        .update_member_role(&user, &target_user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Member role updated successfully.",
        None::<()>,
    )))
}
