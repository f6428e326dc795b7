use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::workday_service::WorkdayService,
    types::{
        requests::workday::{
            assign_request::AssignRequest, create_workday_request::CreateWorkdayRequest,
            update_workday_request::UpdateWorkdayRequest, workday_query::WorkdayQuery,
        },
        responses::{api_response::ApiResponse, workday_response::GenerateResponse},
    },
    utils::auth_utils::AuthenticatedUser,
};

pub async fn list_workdays_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
    query: web::Query<WorkdayQuery>,
) -> Result<HttpResponse, ApiError> {
    let response = workday_service
        .list_workdays(&user, query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Workdays fetched successfully.",
        response,
    )))
}

pub async fn create_workday_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
    payload: web::Json<CreateWorkdayRequest>,
) -> Result<HttpResponse, ApiError> {
    let workday = workday_service
        .create_workday(&user, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Workday created successfully.",
        workday,
    )))
}

pub async fn update_workday_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
    workday_id: web::Path<String>,
    payload: web::Json<UpdateWorkdayRequest>,
) -> Result<HttpResponse, ApiError> {
    let workday = workday_service
        .update_workday(&user, &workday_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Workday updated successfully.",
        workday,
    )))
}

pub async fn delete_workday_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
    workday_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    workday_service.delete_workday(&user, &workday_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Workday deleted successfully.",
        None::<()>,
    )))
}

pub async fn assign_timeslot_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
    path: web::Path<(String, String)>,
    payload: web::Json<AssignRequest>,
) -> Result<HttpResponse, ApiError> {
    let (workday_id, timeslot_id) = path.into_inner();
    let workday = workday_service
        .assign_timeslot(&user, &workday_id, &timeslot_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Timeslot assignment updated.",
        workday,
    )))
}

pub async fn delete_timeslot_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (workday_id, timeslot_id) = path.into_inner();
    let workday = workday_service
        .delete_timeslot(&user, &workday_id, &timeslot_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Timeslot deleted successfully.",
        workday,
    )))
}

pub async fn generate_workdays_handler(
    user: AuthenticatedUser,
    workday_service: web::Data<Arc<WorkdayService>>,
) -> Result<HttpResponse, ApiError> {
    let created = workday_service.generate_workdays(&user).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Workdays generated successfully.",
        GenerateResponse { created },
    )))
}
