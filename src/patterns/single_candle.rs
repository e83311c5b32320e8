// src/patterns/single_candle.rs
use crate::types::CandleData;

/// Shadow must exceed this multiple of the body for hammer shapes.
pub const HAMMER_WICK_RATIO: f64 = 2.0;
/// Doji body is at most this fraction of the range.
pub const DOJI_BODY_RATIO: f64 = 0.1;
pub const SPINNING_TOP_BODY_RATIO: f64 = 0.3;

/// Bullish bodies only; a red bar with the same shape is not a hammer.
pub fn is_hammer(candle: &CandleData) -> bool {
    let body = candle.body();
    candle.is_bullish()
        && candle.lower_wick() > HAMMER_WICK_RATIO * body
        && candle.upper_wick() < body
}

pub fn is_inverted_hammer(candle: &CandleData) -> bool {
    let body = candle.body();
    candle.upper_wick() > HAMMER_WICK_RATIO * body && candle.lower_wick() < body
}

// Marubozu comparisons are exact on purpose: the open and close must be the extremes.
pub fn is_white_marubozu(candle: &CandleData) -> bool {
    candle.is_bullish() && candle.open == candle.low && candle.close == candle.high
}

pub fn is_black_marubozu(candle: &CandleData) -> bool {
    candle.is_bearish() && candle.open == candle.high && candle.close == candle.low
}

/// Also true for a flat bar (zero body, zero range).
pub fn is_doji(candle: &CandleData) -> bool {
    candle.body() <= DOJI_BODY_RATIO * candle.range()
}

pub fn is_spinning_top(candle: &CandleData) -> bool {
    let body = candle.body();
    body <= SPINNING_TOP_BODY_RATIO * candle.range()
        && candle.upper_wick() > body
        && candle.lower_wick() > body
}
