mod config;
mod db;
mod error;
mod models;
mod repository;
mod routes;
mod services;
mod utils;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::repository::SeaOrmTradeRepository;
use crate::services::trade_service::TradeService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .init();

    info!("🔌 Connecting to database...");
    let db = db::establish_connection(&config)
        .await
        .map_err(std::io::Error::other)?;
    info!("✅ Database connected!");

    let service = web::Data::new(TradeService::new(
        Arc::new(SeaOrmTradeRepository::new(db)),
        config.db_timeout,
    ));

    info!("🚀 Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(routes::configure_routes)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
