// src/signal.rs
// Merges zone strength, the classified pattern and the indicators into one recommendation.

use crate::config::EngineSettings;
use crate::format::{format_price, NOT_AVAILABLE};
use crate::types::{Direction, IndicatorSet, PatternMatch, Signal, Trend};

pub fn trend_from_averages(indicators: &IndicatorSet) -> Trend {
    match (indicators.ema_short, indicators.ema_long) {
        (Some(short), Some(long)) if short > long => Trend::Uptrend,
        (Some(short), Some(long)) if short < long => Trend::Downtrend,
        _ => Trend::Undefined,
    }
}

#[derive(Debug, Clone)]
pub struct SignalComposer {
    settings: EngineSettings,
}

impl SignalComposer {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Directional pattern with confidence strictly above the threshold.
    pub fn is_confirmed(&self, pattern: &PatternMatch) -> bool {
        pattern.direction.is_directional() && pattern.confidence > self.settings.confirmation_threshold
    }

    pub fn compose(&self, pattern: &PatternMatch, last_close: f64, strength: f64) -> Signal {
        let confirmed = self.is_confirmed(pattern);
        let take_profit_ratio = self.settings.take_profit_ratio;

        let levels = match (confirmed, pattern.direction) {
            (true, Direction::Bullish) => Some((
                "Buy",
                last_close + self.settings.target_offset,
                last_close - self.settings.stop_offset,
            )),
            (true, Direction::Bearish) => Some((
                "Sell",
                last_close - self.settings.target_offset,
                last_close + self.settings.stop_offset,
            )),
            _ => None,
        };

        match levels {
            Some((side, target, stop)) => Signal {
                direction: pattern.direction.as_str().to_string(),
                entry: format!("{} @ {}", side, format_price(last_close)),
                target: format_price(target),
                stop: format_price(stop),
                confirmed,
                strength,
                take_profit_ratio,
            },
            None => Signal {
                direction: NOT_AVAILABLE.to_string(),
                entry: NOT_AVAILABLE.to_string(),
                target: NOT_AVAILABLE.to_string(),
                stop: NOT_AVAILABLE.to_string(),
                confirmed: false,
                strength,
                take_profit_ratio,
            },
        }
    }
}
