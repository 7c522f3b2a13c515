mod config;
mod services;
mod store;

use crate::config::ServerConfig;
use crate::store::state::RecipeStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // One store for the whole process, shared by every worker.
    let store = web::Data::new(RecipeStore::new());
    let json_limit = config.json_limit;

    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config(json_limit))
            .app_data(store.clone())
            .service(services::recipes::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
