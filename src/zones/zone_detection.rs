// src/zones/zone_detection.rs
// Support/resistance estimation, touch and rejection counting, strength scoring.

use crate::config::EngineSettings;
use crate::errors::DegenerateInput;
use crate::format::round_to;
use crate::patterns::PatternKind;
use crate::types::{CandleData, CandleSeries, LevelCounts, PatternMatch, Zone, ZoneAnalysis};
use log::debug;

/// Percentile with linear interpolation between ranked samples (rank = p/100 * (n-1)).
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (pct.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = rank.ceil() as usize;
    let fraction = rank - lower_idx as f64;

    Some(sorted[lower_idx] + (sorted[upper_idx] - sorted[lower_idx]) * fraction)
}

#[derive(Debug, Clone)]
pub struct ZoneDetector {
    settings: EngineSettings,
}

impl ZoneDetector {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn detect(&self, series: &CandleSeries) -> (ZoneAnalysis, Vec<DegenerateInput>) {
        let mut warnings = Vec::new();
        let highs = series.highs();
        let lows = series.lows();

        // Series is never empty, so both percentiles exist.
        let resistance_price = round_to(
            percentile(&highs, self.settings.resistance_percentile).unwrap_or(0.0),
            5,
        );
        let support_price = round_to(
            percentile(&lows, self.settings.support_percentile).unwrap_or(0.0),
            5,
        );

        let max_high = highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_low = lows.iter().copied().fold(f64::INFINITY, f64::min);
        let range_span = max_high - min_low;

        let base_strength = if max_high == 0.0 {
            warnings.push(DegenerateInput::ZeroMaxHigh);
            100.0
        } else {
            (100.0 - (range_span / max_high) * 100.0).clamp(0.0, 100.0)
        };

        let candles = series.candles();
        let touches = LevelCounts {
            support: self.touch_count(candles, support_price),
            resistance: self.touch_count(candles, resistance_price),
        };
        let rejections = LevelCounts {
            support: self.rejection_count(candles, support_price),
            resistance: self.rejection_count(candles, resistance_price),
        };

        debug!(
            "[Zones] support={:.5} resistance={:.5} span={:.5} touches={:?} rejections={:?}",
            support_price, resistance_price, range_span, touches, rejections
        );

        (
            ZoneAnalysis {
                support: Zone::around(support_price, self.settings.zone_half_width),
                resistance: Zone::around(resistance_price, self.settings.zone_half_width),
                touches,
                rejections,
                base_strength,
                range_span,
            },
            warnings,
        )
    }

    fn touches(&self, candle: &CandleData, level: f64) -> bool {
        (candle.low - level).abs() <= self.settings.touch_buffer
            || (candle.high - level).abs() <= self.settings.touch_buffer
    }

    pub fn touch_count(&self, candles: &[CandleData], level: f64) -> usize {
        candles.iter().filter(|c| self.touches(c, level)).count()
    }

    /// Touching candles whose combined wick dominates the body.
    pub fn rejection_count(&self, candles: &[CandleData], level: f64) -> usize {
        candles
            .iter()
            .filter(|c| self.touches(c, level))
            .filter(|c| c.wick() > self.settings.rejection_wick_ratio * c.body())
            .count()
    }

    /// Final score in [0, 100], two decimals.
    pub fn strength_score(&self, zones: &ZoneAnalysis, pattern: &PatternMatch) -> f64 {
        let touch_factor = self.settings.touch_weight * zones.touches.total() as f64;
        let rejection_factor = self.settings.rejection_weight * zones.rejections.total() as f64;
        let pattern_factor = if PatternKind::from_name(pattern.name)
            .map_or(false, |kind| kind.is_high_confidence_reversal())
        {
            self.settings.reversal_pattern_bonus
        } else {
            0.0
        };

        let total = zones.base_strength + touch_factor + rejection_factor + pattern_factor;
        round_to(total.clamp(0.0, 100.0), 2)
    }
}
