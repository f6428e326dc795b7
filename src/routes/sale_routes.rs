use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::sale_handler::{
        create_sale_handler, delete_sale_handler, leaderboard_handler, list_sales_handler,
        weekly_report_handler,
    },
    services::sale_service::SaleService,
};

pub fn configure_sale_routes(
    cfg: &mut web::ServiceConfig,
    sale_service_data: web::Data<Arc<SaleService>>,
) {
    cfg.service(
        web::scope("/api/v1/sales")
            .wrap(configure_cors())
            .app_data(sale_service_data)
            .route("", web::get().to(list_sales_handler))
            .route("", web::post().to(create_sale_handler))
            .route("/leaderboard", web::get().to(leaderboard_handler))
            .route("/weekly-report", web::get().to(weekly_report_handler))
            .route("/{id}", web::delete().to(delete_sale_handler)),
    );
}
