// src/data/mod.rs
pub mod csv_loader;

pub use csv_loader::{load_candles, load_candles_from_path, CsvLoadError};
