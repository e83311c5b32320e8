// src/types.rs
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, DegenerateInput};

// --- Input ---
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CandleData {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleData {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    pub fn body_mid(&self) -> f64 {
        (self.open + self.close) / 2.0
    }

    pub fn upper_wick(&self) -> f64 {
        self.high - self.body_top()
    }

    pub fn lower_wick(&self) -> f64 {
        self.body_bottom() - self.low
    }

    /// Both wicks together.
    pub fn wick(&self) -> f64 {
        self.upper_wick() + self.lower_wick()
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the reason this candle is malformed, if it is.
    fn validation_error(&self) -> Option<String> {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite()) {
            return Some("prices must be finite".to_string());
        }
        if self.high < self.body_top() {
            return Some(format!(
                "high {} is below the body top {}",
                self.high,
                self.body_top()
            ));
        }
        if self.low > self.body_bottom() {
            return Some(format!(
                "low {} is above the body bottom {}",
                self.low,
                self.body_bottom()
            ));
        }
        None
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AnalysisRequest {
    pub candles: Vec<CandleData>,
}

/// Ordered, read-only view over validated bars. Index 0 is the oldest bar.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    candles: Vec<CandleData>,
}

#[allow(clippy::len_without_is_empty)]
impl CandleSeries {
    pub fn new(candles: Vec<CandleData>) -> Result<Self, AnalysisError> {
        if candles.is_empty() {
            return Err(AnalysisError::InsufficientData);
        }
        for (index, candle) in candles.iter().enumerate() {
            if let Some(reason) = candle.validation_error() {
                return Err(AnalysisError::InvalidCandle { index, reason });
            }
        }
        Ok(Self { candles })
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn candles(&self) -> &[CandleData] {
        &self.candles
    }

    pub fn last(&self) -> &CandleData {
        // Non-empty by construction.
        &self.candles[self.candles.len() - 1]
    }

    /// The trailing `n` candles, or `None` if the series is shorter.
    pub fn tail(&self, n: usize) -> Option<&[CandleData]> {
        let len = self.candles.len();
        if len < n {
            None
        } else {
            Some(&self.candles[len - n..])
        }
    }

    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }
}

// --- Engine values ---

/// A support or resistance level with its display band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub price: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Zone {
    pub fn around(price: f64, half_width: f64) -> Self {
        Self {
            price,
            lower: price - half_width,
            upper: price + half_width,
        }
    }

    pub fn band_label(&self) -> String {
        format!("{:.5} - {:.5}", self.lower, self.upper)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
    None,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Bullish => "Bullish",
            Direction::Bearish => "Bearish",
            Direction::Neutral => "Neutral",
            Direction::None => "None",
        }
    }

    /// Bullish or Bearish.
    pub fn is_directional(&self) -> bool {
        matches!(self, Direction::Bullish | Direction::Bearish)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub name: &'static str,
    pub direction: Direction,
    pub confidence: f64,
}

impl PatternMatch {
    pub fn none() -> Self {
        Self {
            name: "None",
            direction: Direction::None,
            confidence: 0.0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.direction == Direction::None
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub support: usize,
    pub resistance: usize,
}

impl LevelCounts {
    pub fn total(&self) -> usize {
        self.support + self.resistance
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneAnalysis {
    pub support: Zone,
    pub resistance: Zone,
    pub touches: LevelCounts,
    pub rejections: LevelCounts,
    /// Range-tightness base score before touch, rejection and pattern bonuses.
    pub base_strength: f64,
    pub range_span: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub rsi: f64,
    pub ema_short: Option<f64>,
    pub ema_long: Option<f64>,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Uptrend,
    Downtrend,
    #[serde(rename = "N/A")]
    Undefined,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Uptrend => "Uptrend",
            Trend::Downtrend => "Downtrend",
            Trend::Undefined => "N/A",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub direction: String,
    pub entry: String,
    pub target: String,
    pub stop: String,
    pub confirmed: bool,
    pub strength: f64,
    pub take_profit_ratio: u32,
}

// --- Output ---

/// Everything the transport serializes for one analysis.
#[derive(Serialize, Debug, Clone)]
pub struct AnalysisReport {
    pub support: String,
    pub resistance: String,
    pub entry: String,
    pub target: String,
    pub stop: String,
    pub strength: f64,
    pub pattern: PatternMatch,
    pub touches: LevelCounts,
    pub rejections: LevelCounts,
    pub signal: bool,
    pub direction: String,
    pub trend: Trend,
    pub rsi: f64,
    pub ema_short: Option<f64>,
    pub ema_long: Option<f64>,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    pub take_profit_ratio: u32,
    #[serde(skip)]
    pub warnings: Vec<DegenerateInput>,
}
