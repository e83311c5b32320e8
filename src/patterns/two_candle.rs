// src/patterns/two_candle.rs
// Each predicate takes the earlier candle first.

use crate::types::CandleData;

/// Absolute price tolerance for "same level" tests (tweezers, on-neck, counterattack).
pub const LEVEL_TOLERANCE: f64 = 0.0002;

fn same_level(a: f64, b: f64) -> bool {
    (a - b).abs() <= LEVEL_TOLERANCE
}

pub fn is_bullish_engulfing(first: &CandleData, second: &CandleData) -> bool {
    first.is_bearish()
        && second.is_bullish()
        && second.close > first.open
        && second.open < first.close
}

pub fn is_bearish_engulfing(first: &CandleData, second: &CandleData) -> bool {
    first.is_bullish()
        && second.is_bearish()
        && second.close < first.open
        && second.open > first.close
}

pub fn is_piercing(first: &CandleData, second: &CandleData) -> bool {
    first.is_bearish()
        && second.is_bullish()
        && second.open < first.close
        && second.close > first.body_mid()
        && second.close < first.open
}

pub fn is_dark_cloud_cover(first: &CandleData, second: &CandleData) -> bool {
    first.is_bullish()
        && second.is_bearish()
        && second.open > first.close
        && second.close < first.body_mid()
        && second.close > first.open
}

pub fn is_bullish_harami(first: &CandleData, second: &CandleData) -> bool {
    first.is_bearish()
        && second.is_bullish()
        && second.open > first.close
        && second.close < first.open
}

pub fn is_bearish_harami(first: &CandleData, second: &CandleData) -> bool {
    first.is_bullish()
        && second.is_bearish()
        && second.open < first.close
        && second.close > first.open
}

pub fn is_tweezer_bottom(first: &CandleData, second: &CandleData) -> bool {
    first.is_bearish() && second.is_bullish() && same_level(first.low, second.low)
}

pub fn is_tweezer_top(first: &CandleData, second: &CandleData) -> bool {
    first.is_bullish() && second.is_bearish() && same_level(first.high, second.high)
}

pub fn is_on_neck(first: &CandleData, second: &CandleData) -> bool {
    first.is_bearish()
        && second.is_bullish()
        && second.open < first.low
        && same_level(second.close, first.low)
}

pub fn is_bullish_counterattack(first: &CandleData, second: &CandleData) -> bool {
    first.is_bearish() && second.is_bullish() && same_level(second.close, first.close)
}

pub fn is_bearish_counterattack(first: &CandleData, second: &CandleData) -> bool {
    first.is_bullish() && second.is_bearish() && same_level(second.close, first.close)
}
