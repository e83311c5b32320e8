// src/api/zones_handler.rs
use actix_web::{web, HttpResponse, Responder};
use log::{debug, info};

use crate::engine::AnalysisEngine;
use crate::errors::ServiceError;
use crate::types::AnalysisRequest;

/// Shared, read-only handler state.
pub struct AppState {
    pub engine: AnalysisEngine,
    pub max_candles: usize,
}

impl AppState {
    pub fn new(engine: AnalysisEngine, max_candles: usize) -> Self {
        Self {
            engine,
            max_candles,
        }
    }
}

pub async fn analyze_zones_handler(
    state: web::Data<AppState>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = body.into_inner();
    let candle_count = request.candles.len();

    if candle_count > state.max_candles {
        return Err(ServiceError::BadRequest(format!(
            "{} candles submitted, limit is {}",
            candle_count, state.max_candles
        )));
    }

    debug!("[ZonesHandler] Received {} candles", candle_count);
    let report = state.engine.analyze(request.candles)?;
    info!(
        "[ZonesHandler] {} candles -> pattern '{}', strength {:.2}, signal {}",
        candle_count, report.pattern.name, report.strength, report.signal
    );

    Ok(HttpResponse::Ok().json(report))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
