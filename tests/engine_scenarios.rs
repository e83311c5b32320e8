// tests/engine_scenarios.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use candle_signal_engine::errors::DegenerateInput;
use candle_signal_engine::types::{Direction, Trend};
use candle_signal_engine::{AnalysisEngine, AnalysisError, CandleData};

fn setup_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn flat(price: f64) -> CandleData {
    CandleData::new(price, price, price, price)
}

fn random_walk(seed: u64, len: usize) -> Vec<CandleData> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price: f64 = 1.1000;
    (0..len)
        .map(|_| {
            let open = price;
            let close = open + rng.gen_range(-0.0020..0.0020);
            let high = open.max(close) + rng.gen_range(0.0..0.0015);
            let low = open.min(close) - rng.gen_range(0.0..0.0015);
            price = close;
            CandleData::new(open, high, low, close)
        })
        .collect()
}

#[test]
fn scenario_a_textbook_bullish_engulfing() {
    setup_test_logging();
    let candles = vec![
        CandleData::new(1.1020, 1.1025, 1.1012, 1.1015),
        CandleData::new(1.1015, 1.1018, 1.1005, 1.1010),
        CandleData::new(1.1012, 1.1016, 1.1006, 1.1013),
        CandleData::new(1.1010, 1.1012, 1.0998, 1.1000),
        CandleData::new(1.0998, 1.1016, 1.0996, 1.1014),
    ];

    let report = AnalysisEngine::default().analyze(candles).unwrap();

    assert_eq!(report.pattern.name, "Bullish Engulfing");
    assert_eq!(report.pattern.direction, Direction::Bullish);
    assert_eq!(report.pattern.confidence, 0.90);

    assert!(report.signal);
    assert_eq!(report.direction, "Bullish");
    assert_eq!(report.entry, "Buy @ 1.10140");
    assert_eq!(report.target, "1.10340");
    assert_eq!(report.stop, "1.10040");
    assert_eq!(report.take_profit_ratio, 2);
}

#[test]
fn scenario_b_identical_flat_candles() {
    setup_test_logging();
    let report = AnalysisEngine::default()
        .analyze(vec![flat(1.2345); 8])
        .unwrap();

    assert_eq!(report.pattern.name, "Doji");
    assert_eq!(report.pattern.direction, Direction::Neutral);
    assert_eq!(report.pattern.confidence, 0.60);
    assert!(!report.signal);
    assert_eq!(report.entry, "N/A");

    assert_eq!(report.support, "1.23400 - 1.23500");
    assert_eq!(report.resistance, "1.23400 - 1.23500");
    // base 100 plus every candle touching both levels, capped
    assert_eq!(report.strength, 100.0);
    assert_eq!(report.touches.support, 8);
    assert_eq!(report.rejections.support, 0);
    assert_eq!(report.rsi, 100.0);
}

#[test]
fn scenario_b_zero_prices_do_not_divide() {
    let report = AnalysisEngine::default().analyze(vec![flat(0.0); 5]).unwrap();
    assert_eq!(report.strength, 100.0);
    assert_eq!(report.pattern.name, "Doji");
    assert!(report.warnings.contains(&DegenerateInput::ZeroMaxHigh));
}

#[test]
fn scenario_c_three_candles() {
    setup_test_logging();
    let candles = vec![
        CandleData::new(1.1000, 1.1010, 1.0990, 1.1005),
        CandleData::new(1.1005, 1.1020, 1.1000, 1.1015),
        CandleData::new(1.1015, 1.1030, 1.1010, 1.1020),
    ];

    let report = AnalysisEngine::default().analyze(candles).unwrap();

    assert_eq!(report.pattern.name, "None");
    assert_eq!(report.pattern.direction, Direction::None);
    assert_eq!(report.pattern.confidence, 0.0);

    // support 1.0991, resistance 1.1029
    assert_eq!(report.support, "1.09860 - 1.09960");
    assert_eq!(report.resistance, "1.10240 - 1.10340");
    assert_eq!(report.touches.support, 1);
    assert_eq!(report.touches.resistance, 1);
    assert_eq!(report.rejections.support, 1);
    assert_eq!(report.rejections.resistance, 1);
    assert!(report.strength >= 0.0 && report.strength <= 100.0);
    assert_eq!(report.trend, Trend::Undefined);
}

#[test]
fn scenario_d_rising_closes_make_an_uptrend() {
    setup_test_logging();
    let candles: Vec<CandleData> = (0..120)
        .map(|i| {
            let close = 1.0 + i as f64 * 0.001;
            let open = close - 0.0005;
            CandleData::new(open, close + 0.0002, open - 0.0002, close)
        })
        .collect();

    let report = AnalysisEngine::default().analyze(candles).unwrap();

    assert_eq!(report.trend, Trend::Uptrend);
    assert_eq!(report.rsi, 100.0);
    let short = report.ema_short.unwrap();
    let long = report.ema_long.unwrap();
    assert!(short > long);
    assert!(report.bollinger_upper > report.bollinger_lower);
}

#[test]
fn red_hammer_shape_gives_no_buy_signal() {
    setup_test_logging();
    let mut candles = vec![flat(1.1000); 4];
    candles.push(CandleData::new(1.1002, 1.1003, 1.0990, 1.1000));

    let report = AnalysisEngine::default().analyze(candles).unwrap();

    assert_eq!(report.pattern.name, "None");
    assert!(!report.signal);
    assert_eq!(report.entry, "N/A");
}

#[test]
fn falling_closes_make_a_downtrend() {
    let candles: Vec<CandleData> = (0..100)
        .map(|i| {
            let close = 2.0 - i as f64 * 0.001;
            let open = close + 0.0005;
            CandleData::new(open, open + 0.0002, close - 0.0002, close)
        })
        .collect();

    let report = AnalysisEngine::default().analyze(candles).unwrap();
    assert_eq!(report.trend, Trend::Downtrend);
    assert_eq!(report.rsi, 0.0);
}

#[test]
fn empty_series_fails_without_partial_result() {
    assert_eq!(
        AnalysisEngine::default().analyze(Vec::new()).unwrap_err(),
        AnalysisError::InsufficientData
    );
}

#[test]
fn short_series_never_classify() {
    let engine = AnalysisEngine::default();
    for len in 1..5 {
        let report = engine.analyze(random_walk(len as u64, len)).unwrap();
        assert_eq!(report.pattern.name, "None");
        assert_eq!(report.pattern.confidence, 0.0);
    }
}

#[test]
fn reported_values_stay_in_bounds() {
    let engine = AnalysisEngine::default();
    for seed in 0..200u64 {
        let len = 1 + (seed as usize * 7) % 150;
        let report = engine.analyze(random_walk(seed, len)).unwrap();

        let support: f64 = report.support.split(" - ").next().unwrap().parse().unwrap();
        let resistance: f64 = report.resistance.split(" - ").next().unwrap().parse().unwrap();
        assert!(support <= resistance, "seed {}: {} > {}", seed, support, resistance);

        assert!((0.0..=100.0).contains(&report.strength), "seed {}", seed);
        assert!((0.0..=100.0).contains(&report.rsi), "seed {}", seed);
        assert!((0.0..=1.0).contains(&report.pattern.confidence));
        if report.signal {
            assert!(report.pattern.confidence > 0.80);
            assert_ne!(report.entry, "N/A");
        } else {
            assert_eq!(report.target, "N/A");
        }
    }
}

#[test]
fn report_serializes_every_contract_field() {
    let report = AnalysisEngine::default()
        .analyze(vec![flat(1.1); 3])
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    let mut expected = vec![
        "support",
        "resistance",
        "entry",
        "target",
        "stop",
        "strength",
        "pattern",
        "touches",
        "rejections",
        "signal",
        "direction",
        "trend",
        "rsi",
        "ema_short",
        "ema_long",
        "bollinger_upper",
        "bollinger_lower",
        "take_profit_ratio",
    ];
    expected.sort_unstable();
    assert_eq!(keys, expected);

    assert_eq!(value["trend"], "N/A");
    assert_eq!(value["ema_short"], serde_json::Value::Null);
    assert_eq!(value["pattern"]["name"], "None");
    assert_eq!(value["pattern"]["direction"], "None");
    assert_eq!(value["touches"]["support"], 3);
    assert_eq!(value["take_profit_ratio"], 2);
    assert_eq!(value["signal"], false);
}
