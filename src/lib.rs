use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
pub mod db;
pub mod error;
mod handlers;
pub mod ledger;
pub mod models;
mod routes;
pub mod stats;
pub mod telemetry;
pub mod utils;
use crate::config::settings::ApplicationSettings;
use crate::routes::{init_extractors, init_routes, route_not_found};

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    settings: ApplicationSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let allowed_origins = settings.allowed_origins.clone();
    let settings_data = web::Data::new(settings);

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(settings_data.clone())
            .configure(init_extractors)
            .configure(init_routes)
            .default_service(web::route().to(route_not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
