// src/errors.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Fatal conditions: the request fails and no partial report is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Candle series is empty")]
    InsufficientData,

    #[error("Candle {index} is invalid: {reason}")]
    InvalidCandle { index: usize, reason: String },
}

/// Non-fatal edge cases absorbed into sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateInput {
    /// max(high) == 0, strength base forced to 100.
    ZeroMaxHigh,
    /// No negative close deltas, RSI forced to 100.
    ZeroLossRsi,
    /// Fewer closes than the short or long average window.
    TrendWindowUndefined { available: usize, required: usize },
    /// Bollinger computed over the whole series instead of the full window.
    ShortBollingerWindow { available: usize },
    /// Too few candles for pattern classification.
    PatternWindowTooShort { available: usize },
}

impl DegenerateInput {
    /// Short-window sentinels are routine for small requests and stay at debug.
    pub fn log_level(&self) -> log::Level {
        match self {
            DegenerateInput::ZeroMaxHigh => log::Level::Warn,
            _ => log::Level::Debug,
        }
    }
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateInput::ZeroMaxHigh => write!(f, "max high is zero, strength base set to 100"),
            DegenerateInput::ZeroLossRsi => write!(f, "no losing closes, RSI set to 100"),
            DegenerateInput::TrendWindowUndefined {
                available,
                required,
            } => write!(
                f,
                "{} closes available, {} required for trend average",
                available, required
            ),
            DegenerateInput::ShortBollingerWindow { available } => write!(
                f,
                "Bollinger bands computed over {} closes",
                available
            ),
            DegenerateInput::PatternWindowTooShort { available } => write!(
                f,
                "{} candles available, pattern classification skipped",
                available
            ),
        }
    }
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Analysis(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Analysis(e) => {
                log::warn!("Analysis rejected: {}", e);
                HttpResponse::UnprocessableEntity().json(json!({
                    "error": "Analysis failed",
                    "message": e.to_string(),
                }))
            }
            ServiceError::BadRequest(msg) => {
                log::warn!("Bad request: {}", msg);
                HttpResponse::BadRequest().json(json!({
                    "error": "Bad request",
                    "message": msg,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_zero_max_high_logs_at_warn() {
        assert_eq!(DegenerateInput::ZeroMaxHigh.log_level(), log::Level::Warn);
        assert_eq!(DegenerateInput::ZeroLossRsi.log_level(), log::Level::Debug);
        assert_eq!(
            DegenerateInput::TrendWindowUndefined {
                available: 5,
                required: 100
            }
            .log_level(),
            log::Level::Debug
        );
        assert_eq!(
            DegenerateInput::ShortBollingerWindow { available: 5 }.log_level(),
            log::Level::Debug
        );
        assert_eq!(
            DegenerateInput::PatternWindowTooShort { available: 3 }.log_level(),
            log::Level::Debug
        );
    }
}
