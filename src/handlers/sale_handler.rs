use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::sale_service::SaleService,
    types::{
        requests::sale::{
            create_sale_request::CreateSaleRequest, weekly_report_query::WeeklyReportQuery,
        },
        responses::api_response::ApiResponse,
    },
    utils::auth_utils::AuthenticatedUser,
};

pub async fn create_sale_handler(
    user: AuthenticatedUser,
    sale_service: web::Data<Arc<SaleService>>,
    payload: web::Json<CreateSaleRequest>,
) -> Result<HttpResponse, ApiError> {
    let sale = sale_service.create_sale(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Sale recorded successfully.", sale)))
}

pub async fn list_sales_handler(
    user: AuthenticatedUser,
    sale_service: web::Data<Arc<SaleService>>,
) -> Result<HttpResponse, ApiError> {
    let sales = sale_service.list_sales(&user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Sales fetched successfully.", sales)))
}

pub async fn delete_sale_handler(
    user: AuthenticatedUser,
    sale_service: web::Data<Arc<SaleService>>,
    sale_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    sale_service.delete_sale(&user, &sale_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Sale deleted successfully.",
        None::<()>,
    )))
}

pub async fn leaderboard_handler(
    user: AuthenticatedUser,
    sale_service: web::Data<Arc<SaleService>>,
) -> Result<HttpResponse, ApiError> {
    let entries = sale_service.leaderboard(&user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Leaderboard fetched successfully.",
        entries,
    )))
}

pub async fn weekly_report_handler(
    user: AuthenticatedUser,
    sale_service: web::Data<Arc<SaleService>>,
    query: web::Query<WeeklyReportQuery>,
) -> Result<HttpResponse, ApiError> {
    let report = sale_service
        .weekly_report(&user, query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Weekly report fetched successfully.",
        report,
    )))
}
