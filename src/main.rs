use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger, from_fn};
use actix_web::{App, HttpServer, web};
use env_logger::Env;
use log::{error, info};

mod auth;
mod config;
mod database;
mod middleware;
mod request;
mod router;
#[cfg(test)]
mod test_support;
mod utils;
mod volunteer;

use config::AppConfig;
use middleware::auth::TokenService;
use middleware::cors::cors;
use middleware::logger::log_request;
use middleware::not_found::not_found;
use request::service::RequestService;
use router::index::routes;
use volunteer::service::VolunteerService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let mongo_client = database::connect_to_mongo(&config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let token_service = web::Data::new(TokenService::new(
        &config.token_secret,
        config.environment,
    ));
    let volunteer_service = web::Data::new(VolunteerService::from_client(
        &mongo_client,
        &config.database_name,
        config.allow_unfiltered_listing,
    ));
    let request_service = web::Data::new(RequestService::from_client(
        &mongo_client,
        &config.database_name,
        config.allow_unfiltered_listing,
    ));

    let bind_address = (config.host.clone(), config.port);
    info!(
        "Volunteer Management Server is running on port: {} ({:?})",
        config.port, config.environment
    );

    HttpServer::new(move || {
        let policy = config.auth_policy.clone();
        App::new()
            .wrap(from_fn(log_request))
            .wrap(Logger::default())
            .wrap(cors(&config.cors_origins))
            .app_data(token_service.clone())
            .app_data(volunteer_service.clone())
            .app_data(request_service.clone())
            .configure(|cfg| routes(cfg, &policy))
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
    })
    .bind(bind_address)?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
