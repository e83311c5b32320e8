// src/lib.rs
pub mod api;
pub mod config;
pub mod data;
pub mod engine;
pub mod errors;
pub mod format;
pub mod indicators;
pub mod patterns;
pub mod signal;
pub mod types;
pub mod zones;

pub use engine::AnalysisEngine;
pub use errors::AnalysisError;
pub use types::{AnalysisReport, CandleData, CandleSeries};
