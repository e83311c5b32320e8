// src/indicators.rs
// RSI, trend averages and Bollinger Bands over the close sequence.

use crate::config::EngineSettings;
use crate::errors::DegenerateInput;
use crate::types::IndicatorSet;
use log::debug;

/// RSI over every consecutive close delta in the series.
///
/// Gain is the mean of the positive deltas and loss the mean magnitude of the
/// negative ones. With no losses (including a single close) the result is 100.
pub fn calculate_rsi(closes: &[f64]) -> f64 {
    let mut gains = Vec::new();
    let mut losses = Vec::new();

    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            gains.push(delta);
        } else if delta < 0.0 {
            losses.push(-delta);
        }
    }

    let gain = mean(&gains).unwrap_or(0.0);
    let loss = mean(&losses).unwrap_or(0.0);

    if loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + gain / loss)
}

/// Mean of the last `period` closes. `None` when the series is shorter than the window.
pub fn trailing_average(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }
    mean(&closes[closes.len() - period..])
}

/// Upper and lower band over the last `period` closes (whole series if shorter).
pub fn bollinger_bands(closes: &[f64], period: usize, width: f64) -> (f64, f64) {
    let start = closes.len().saturating_sub(period);
    let window = &closes[start..];
    let Some(center) = mean(window) else {
        return (0.0, 0.0);
    };

    let variance = window.iter().map(|c| (c - center).powi(2)).sum::<f64>() / window.len() as f64;
    let std_dev = variance.sqrt();

    (center + width * std_dev, center - width * std_dev)
}

pub fn calculate_indicators(
    closes: &[f64],
    settings: &EngineSettings,
) -> (IndicatorSet, Vec<DegenerateInput>) {
    let mut warnings = Vec::new();

    let rsi = calculate_rsi(closes);
    if !closes.windows(2).any(|pair| pair[1] < pair[0]) {
        warnings.push(DegenerateInput::ZeroLossRsi);
    }

    let ema_short = trailing_average(closes, settings.short_average_window);
    let ema_long = trailing_average(closes, settings.long_average_window);
    if ema_long.is_none() {
        let required = if ema_short.is_none() {
            settings.short_average_window
        } else {
            settings.long_average_window
        };
        warnings.push(DegenerateInput::TrendWindowUndefined {
            available: closes.len(),
            required,
        });
    }

    if closes.len() < settings.bollinger_window {
        warnings.push(DegenerateInput::ShortBollingerWindow {
            available: closes.len(),
        });
    }
    let (bollinger_upper, bollinger_lower) =
        bollinger_bands(closes, settings.bollinger_window, settings.bollinger_width);

    debug!(
        "[Indicators] rsi={:.2} short={:?} long={:?} bands=({:.5}, {:.5})",
        rsi, ema_short, ema_long, bollinger_upper, bollinger_lower
    );

    (
        IndicatorSet {
            rsi,
            ema_short,
            ema_long,
            bollinger_upper,
            bollinger_lower,
        },
        warnings,
    )
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
