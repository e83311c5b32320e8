// src/patterns/mod.rs
use crate::types::{CandleSeries, PatternMatch};
use log::debug;

// Trait for pattern recognizers
pub trait PatternRecognizer {
    fn classify(&self, series: &CandleSeries) -> PatternMatch;
}

// Declare submodules
mod catalog;
pub mod single_candle;
pub mod three_candle;
pub mod two_candle;

pub use catalog::{PatternKind, DEFAULT_PRECEDENCE};

/// Ordered decision list over the trailing window of the series.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    precedence: Vec<PatternKind>,
    window: usize,
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self {
            precedence: DEFAULT_PRECEDENCE.to_vec(),
            window: 5,
        }
    }
}

impl PatternClassifier {
    /// Classifier with a custom evaluation order.
    pub fn with_precedence(precedence: Vec<PatternKind>, window: usize) -> Self {
        Self { precedence, window }
    }

    pub fn precedence(&self) -> &[PatternKind] {
        &self.precedence
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl PatternRecognizer for PatternClassifier {
    fn classify(&self, series: &CandleSeries) -> PatternMatch {
        let Some(window) = series.tail(self.window) else {
            debug!(
                "[Patterns] {} candles, need {} for classification",
                series.len(),
                self.window
            );
            return PatternMatch::none();
        };

        match self.precedence.iter().find(|kind| kind.matches(window)) {
            Some(kind) => {
                debug!("[Patterns] Matched {}", kind.name());
                kind.to_match()
            }
            None => PatternMatch::none(),
        }
    }
}
