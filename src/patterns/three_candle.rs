// src/patterns/three_candle.rs
// Each predicate takes the candles oldest first.

use super::two_candle::{
    is_bearish_engulfing, is_bearish_harami, is_bullish_engulfing, is_bullish_harami,
};
use crate::types::CandleData;

/// The middle "star" body must be smaller than this fraction of the first body.
pub const STAR_BODY_RATIO: f64 = 0.3;

fn opens_within_body(candle: &CandleData, prior: &CandleData) -> bool {
    candle.open >= prior.body_bottom() && candle.open <= prior.body_top()
}

pub fn is_morning_star(first: &CandleData, star: &CandleData, third: &CandleData) -> bool {
    first.is_bearish()
        && third.is_bullish()
        && star.body() < STAR_BODY_RATIO * first.body()
        && star.body_top() <= first.close
        && third.close > first.body_mid()
}

pub fn is_evening_star(first: &CandleData, star: &CandleData, third: &CandleData) -> bool {
    first.is_bullish()
        && third.is_bearish()
        && star.body() < STAR_BODY_RATIO * first.body()
        && star.body_bottom() >= first.close
        && third.close < first.body_mid()
}

pub fn is_three_inside_up(first: &CandleData, second: &CandleData, third: &CandleData) -> bool {
    is_bullish_harami(first, second) && third.is_bullish() && third.close > first.open
}

pub fn is_three_inside_down(first: &CandleData, second: &CandleData, third: &CandleData) -> bool {
    is_bearish_harami(first, second) && third.is_bearish() && third.close < first.open
}

pub fn is_three_outside_up(first: &CandleData, second: &CandleData, third: &CandleData) -> bool {
    is_bullish_engulfing(first, second) && third.is_bullish() && third.close > second.close
}

pub fn is_three_outside_down(first: &CandleData, second: &CandleData, third: &CandleData) -> bool {
    is_bearish_engulfing(first, second) && third.is_bearish() && third.close < second.close
}

pub fn is_three_white_soldiers(first: &CandleData, second: &CandleData, third: &CandleData) -> bool {
    first.is_bullish()
        && second.is_bullish()
        && third.is_bullish()
        && second.close > first.close
        && third.close > second.close
        && opens_within_body(second, first)
        && opens_within_body(third, second)
}

pub fn is_three_black_crows(first: &CandleData, second: &CandleData, third: &CandleData) -> bool {
    first.is_bearish()
        && second.is_bearish()
        && third.is_bearish()
        && second.close < first.close
        && third.close < second.close
        && opens_within_body(second, first)
        && opens_within_body(third, second)
}
