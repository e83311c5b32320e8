// src/zones/mod.rs
pub mod zone_detection;

pub use zone_detection::{percentile, ZoneDetector};
