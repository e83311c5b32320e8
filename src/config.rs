// src/config.rs
use log::warn;
use std::env;
use std::str::FromStr;

/// Tuned constants of the analysis engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub resistance_percentile: f64,
    pub support_percentile: f64,
    /// Half width of the displayed zone band ("5 pips").
    pub zone_half_width: f64,
    /// Proximity for a candle to count as touching a level.
    pub touch_buffer: f64,
    pub rejection_wick_ratio: f64,
    pub touch_weight: f64,
    pub rejection_weight: f64,
    pub reversal_pattern_bonus: f64,
    pub pattern_window: usize,
    pub short_average_window: usize,
    pub long_average_window: usize,
    pub bollinger_window: usize,
    pub bollinger_width: f64,
    pub confirmation_threshold: f64,
    /// Target and stop offsets are coupled to `take_profit_ratio`; change them together.
    pub target_offset: f64,
    pub stop_offset: f64,
    pub take_profit_ratio: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            resistance_percentile: 95.0,
            support_percentile: 5.0,
            zone_half_width: 0.0005,
            touch_buffer: 0.0007,
            rejection_wick_ratio: 1.5,
            touch_weight: 5.0,
            rejection_weight: 4.0,
            reversal_pattern_bonus: 10.0,
            pattern_window: 5,
            short_average_window: 50,
            long_average_window: 100,
            bollinger_window: 20,
            bollinger_width: 2.0,
            confirmation_threshold: 0.80,
            target_offset: 0.0020,
            stop_offset: 0.0010,
            take_profit_ratio: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub max_candles: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            allowed_origins: AllowedOrigins::Any,
            max_candles: 5000,
        }
    }
}

impl ServerConfig {
    /// Reads HOST, PORT, CORS_ALLOWED_ORIGINS and MAX_CANDLES, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = env::var("HOST").unwrap_or_else(|_| defaults.host.clone());
        let port = parse_env_or("PORT", defaults.port);
        let max_candles = parse_env_or("MAX_CANDLES", defaults.max_candles);
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or(AllowedOrigins::Any);

        Self {
            host,
            port,
            allowed_origins,
            max_candles,
        }
    }
}

fn parse_env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("[Config] Invalid {}='{}', using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

pub fn parse_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(|o| o.to_string())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}
