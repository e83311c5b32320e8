// src/api/mod.rs
pub mod zones_handler;

use actix_cors::Cors;
use actix_web::web;

use crate::config::AllowedOrigins;
use crate::errors::ServiceError;

pub use zones_handler::{analyze_zones_handler, health_check, AppState};

/// Registers every route. Shared by the server binary and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(4 * 1024 * 1024)
        .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .route("/ai/zones", web::post().to(analyze_zones_handler))
        .route("/health", web::get().to(health_check));
}

pub fn build_cors(origins: &AllowedOrigins) -> Cors {
    let cors = match origins {
        AllowedOrigins::Any => Cors::default().allow_any_origin(),
        AllowedOrigins::List(list) => list
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}
