use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use doorcrew_backend::{
    config::database::{connect_to_database, create_unique_indexes},
    constants::PORT,
    repositories::{
        organization_repository::OrganizationRepository, sale_repository::SaleRepository,
        user_repository::UserRepository, workday_repository::WorkdayRepository,
    },
    routes::{
        auth_routes::configure_auth_routes, organization_routes::configure_organization_routes,
        sale_routes::configure_sale_routes, workday_routes::configure_workday_routes,
    },
    services::{
        organization_service::OrganizationService, sale_service::SaleService,
        user_service::UserService, workday_service::WorkdayService,
    },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let client = connect_to_database().await?;
    create_unique_indexes(&client).await?;

    let user_repository = Arc::new(UserRepository::new(&client));
    let organization_repository = Arc::new(OrganizationRepository::new(&client));
    let workday_repository = Arc::new(WorkdayRepository::new(&client));
    let sale_repository = Arc::new(SaleRepository::new(&client));

    let user_service = web::Data::new(Arc::new(UserService::new(user_repository.clone())));
    let organization_service = web::Data::new(Arc::new(OrganizationService::new(
        organization_repository.clone(),
        user_repository.clone(),
    )));
    let workday_service = web::Data::new(Arc::new(WorkdayService::new(
        workday_repository.clone(),
        organization_repository.clone(),
        sale_repository.clone(),
    )));
    let sale_service = web::Data::new(Arc::new(SaleService::new(
        sale_repository,
        workday_repository,
        organization_repository,
        user_repository,
    )));

    let port = *PORT;
    info!("Listening on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .configure(|cfg| configure_auth_routes(cfg, user_service.clone()))
            .configure(|cfg| configure_organization_routes(cfg, organization_service.clone()))
            .configure(|cfg| configure_workday_routes(cfg, workday_service.clone()))
            .configure(|cfg| configure_sale_routes(cfg, sale_service.clone()))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
