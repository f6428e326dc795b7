use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::organization_handler::{
        create_organization_handler, get_organization_handler, join_organization_handler,
        update_member_role_handler,
    },
    services::organization_service::OrganizationService,
};

pub fn configure_organization_routes(
    cfg: &mut web::ServiceConfig,
    organization_service_data: web::Data<Arc<OrganizationService>>,
) {
    cfg.service(
        web::scope("/api/v1/organization")
            .wrap(configure_cors())
            .app_data(organization_service_data)
            .route("", web::get().to(get_organization_handler))
            .route("/create", web::post().to(create_organization_handler))
            .route("/join", web::post().to(join_organization_handler))
            .route(
                "/members/{user_id}/role",
                web::put().to(update_member_role_handler),
            ),
    );
}
