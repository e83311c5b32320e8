// src/engine.rs
// Extracted analysis logic shared by the HTTP endpoint and the CSV tool.

use crate::config::EngineSettings;
use crate::errors::{AnalysisError, DegenerateInput};
use crate::format::round_to;
use crate::indicators::calculate_indicators;
use crate::patterns::{PatternClassifier, PatternRecognizer, DEFAULT_PRECEDENCE};
use crate::signal::{trend_from_averages, SignalComposer};
use crate::types::{AnalysisReport, CandleData, CandleSeries};
use crate::zones::ZoneDetector;
use log::{debug, log};

// ==================== CORE ANALYSIS ENGINE ====================

/// Stateless analysis engine. Holds only immutable settings, so one value can
/// serve every request concurrently.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    settings: EngineSettings,
    zones: ZoneDetector,
    classifier: PatternClassifier,
    composer: SignalComposer,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl AnalysisEngine {
    pub fn new(settings: EngineSettings) -> Self {
        let classifier =
            PatternClassifier::with_precedence(DEFAULT_PRECEDENCE.to_vec(), settings.pattern_window);
        Self::with_classifier(settings, classifier)
    }

    pub fn with_classifier(settings: EngineSettings, classifier: PatternClassifier) -> Self {
        Self {
            zones: ZoneDetector::new(settings.clone()),
            composer: SignalComposer::new(settings.clone()),
            classifier,
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Validates the raw bars and runs the full analysis.
    pub fn analyze(&self, candles: Vec<CandleData>) -> Result<AnalysisReport, AnalysisError> {
        let series = CandleSeries::new(candles)?;
        Ok(self.analyze_series(&series))
    }

    /// Main analysis function. Every edge case past validation becomes a sentinel value.
    pub fn analyze_series(&self, series: &CandleSeries) -> AnalysisReport {
        debug!("[Engine] Analyzing {} candles", series.len());
        let mut warnings: Vec<DegenerateInput> = Vec::new();

        let (indicators, indicator_warnings) =
            calculate_indicators(&series.closes(), &self.settings);
        warnings.extend(indicator_warnings);

        let pattern = self.classifier.classify(series);
        if series.len() < self.classifier.window() {
            warnings.push(DegenerateInput::PatternWindowTooShort {
                available: series.len(),
            });
        }

        let (zones, zone_warnings) = self.zones.detect(series);
        warnings.extend(zone_warnings);

        let strength = self.zones.strength_score(&zones, &pattern);
        let last_close = series.last().close;
        let signal = self.composer.compose(&pattern, last_close, strength);
        let trend = trend_from_averages(&indicators);

        for warning in &warnings {
            log!(warning.log_level(), "[Engine] Degenerate input: {}", warning);
        }
        debug!(
            "[Engine] pattern={} strength={:.2} signal={} trend={}",
            pattern.name,
            strength,
            signal.confirmed,
            trend.as_str()
        );

        AnalysisReport {
            support: zones.support.band_label(),
            resistance: zones.resistance.band_label(),
            entry: signal.entry,
            target: signal.target,
            stop: signal.stop,
            strength: signal.strength,
            pattern,
            touches: zones.touches,
            rejections: zones.rejections,
            signal: signal.confirmed,
            direction: signal.direction,
            trend,
            rsi: round_to(indicators.rsi, 2),
            ema_short: indicators.ema_short.map(|v| round_to(v, 5)),
            ema_long: indicators.ema_long.map(|v| round_to(v, 5)),
            bollinger_upper: round_to(indicators.bollinger_upper, 5),
            bollinger_lower: round_to(indicators.bollinger_lower, 5),
            take_profit_ratio: signal.take_profit_ratio,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trend;

    #[test]
    fn test_empty_series_is_fatal() {
        let engine = AnalysisEngine::default();
        assert_eq!(
            engine.analyze(Vec::new()).unwrap_err(),
            AnalysisError::InsufficientData
        );
    }

    #[test]
    fn test_malformed_candle_is_rejected_with_index() {
        let engine = AnalysisEngine::default();
        let candles = vec![
            CandleData::new(1.1, 1.2, 1.0, 1.15),
            CandleData::new(1.1, 1.05, 1.0, 1.08), // high below open
        ];
        match engine.analyze(candles) {
            Err(AnalysisError::InvalidCandle { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidCandle, got {:?}", other),
        }

        let candles = vec![CandleData::new(f64::NAN, 1.2, 1.0, 1.15)];
        assert!(matches!(
            engine.analyze(candles),
            Err(AnalysisError::InvalidCandle { index: 0, .. })
        ));
    }

    #[test]
    fn test_single_candle_still_produces_full_report() {
        let engine = AnalysisEngine::default();
        let report = engine
            .analyze(vec![CandleData::new(1.1000, 1.1010, 1.0990, 1.1005)])
            .unwrap();

        assert_eq!(report.support, "1.09850 - 1.09950");
        assert_eq!(report.resistance, "1.10050 - 1.10150");
        assert_eq!(report.pattern.name, "None");
        assert_eq!(report.rsi, 100.0);
        assert_eq!(report.trend, Trend::Undefined);
        assert_eq!(report.ema_short, None);
        assert!(!report.signal);
        assert!(report
            .warnings
            .contains(&DegenerateInput::PatternWindowTooShort { available: 1 }));
    }
}
