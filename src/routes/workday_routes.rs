use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::workday_handler::{
        assign_timeslot_handler, create_workday_handler, delete_timeslot_handler,
        delete_workday_handler, generate_workdays_handler, list_workdays_handler,
        update_workday_handler,
    },
    services::workday_service::WorkdayService,
};

pub fn configure_workday_routes(
    cfg: &mut web::ServiceConfig,
    workday_service_data: web::Data<Arc<WorkdayService>>,
) {
    cfg.service(
        web::scope("/api/v1/workdays")
            .wrap(configure_cors())
            .app_data(workday_service_data)
            .route("", web::get().to(list_workdays_handler))
            .route("", web::post().to(create_workday_handler))
            .route("/generate", web::post().to(generate_workdays_handler))
            .route("/{id}", web::put().to(update_workday_handler))
            .route("/{id}", web::delete().to(delete_workday_handler))
            .route(
                "/{id}/timeslots/{timeslot_id}/assign",
                web::put().to(assign_timeslot_handler),
            )
            .route(
                "/{id}/timeslots/{timeslot_id}",
                web::delete().to(delete_timeslot_handler),
            ),
    );
}
