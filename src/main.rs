// src/main.rs
mod app;
mod client;
mod config;
mod handlers;
mod models;
mod render;
mod utils;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;

use crate::app::RosterApp;
use crate::client::{HttpPlayerApi, PlayerApi};
use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    let api: Arc<dyn PlayerApi> = match HttpPlayerApi::from_config(&config) {
        Ok(api) => {
            info!("Using players API at {}", api.base_url());
            Arc::new(api)
        }
        Err(e) => {
            error!("Failed to build players API client: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to build players API client: {}", e),
            ));
        }
    };
    info!("API error policy: {}", config.error_policy);

    let roster = web::Data::new(RosterApp::new(api, &config));

    // A failed initial load is logged by the roster and leaves it empty;
    // the page is still served.
    roster.init().await.ok();

    let bind = config.bind();
    info!("Serving roster on http://{}", bind);
    HttpServer::new(move || App::new().app_data(roster.clone()).configure(handlers::configure))
        .bind(&bind)?
        .run()
        .await
}
