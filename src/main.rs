// src/main.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use candle_signal_engine::api::{self, AppState};
use candle_signal_engine::config::{EngineSettings, ServerConfig};
use candle_signal_engine::AnalysisEngine;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or("candle_signal_engine=debug,info"),
    );

    let config = ServerConfig::from_env();
    let host = config.host.clone();
    let port = config.port;

    // One engine per process, shared read-only by every worker.
    let state = web::Data::new(AppState::new(
        AnalysisEngine::new(EngineSettings::default()),
        config.max_candles,
    ));

    log::info!("Starting server on http://{}:{}", host, port);
    log::info!("  POST /ai/zones");
    log::info!("  GET  /health");
    log::info!(
        "CORS origins: {:?}, max candles per request: {}",
        config.allowed_origins,
        config.max_candles
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(api::build_cors(&config.allowed_origins))
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
