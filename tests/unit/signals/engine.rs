//! Unit tests for signal engine

use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, TimeZone, Utc};
use nifty_signals::config::{ConfigError, EngineConfig};
use nifty_signals::error::EngineError;
use nifty_signals::indicators::IndicatorError;
use nifty_signals::models::{Bar, Signal};
use nifty_signals::signals::engine::{calculate_all_indicators, SignalEngine};

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 9, 15, 0).unwrap() + Duration::minutes(15 * i as i64)
}

fn create_zigzag_bars(count: usize) -> Vec<Bar> {
    let mut bars = Vec::new();
    let mut prev_close: f64 = 100.0;
    for i in 0..count {
        let close = 100.0 + 5.0 * (i as f64 * 0.3).sin() + i as f64 * 0.02;
        let high = prev_close.max(close) + 0.4 + (i % 3) as f64 * 0.3;
        let low = prev_close.min(close) - 0.4 - (i % 4) as f64 * 0.2;
        let volume = 1000.0 + ((i * 37) % 500) as f64;
        bars.push(Bar::new(prev_close, high, low, close, volume, ts(i)));
        prev_close = close;
    }
    bars
}

#[test]
fn test_empty_series() {
    let engine = SignalEngine::default();
    assert!(engine.run(&[]).is_empty());
    assert!(engine.compute_indicators(&[]).is_empty());
}

#[test]
fn test_output_aligned_with_input() {
    let bars = create_zigzag_bars(120);
    let rows = SignalEngine::default().run(&bars);

    assert_eq!(rows.len(), bars.len());
    for (bar, row) in bars.iter().zip(&rows) {
        assert_eq!(&row.indicators.bar, bar);
    }
}

#[test]
fn test_indicator_properties() {
    let bars = create_zigzag_bars(120);
    let rows = SignalEngine::default().compute_indicators(&bars);

    assert!(!rows[0].macd_bullish_cross && !rows[0].macd_bearish_cross);

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            let prev = &rows[i - 1].heikin_ashi;
            let expected = (prev.ha_open + prev.ha_close) / 2.0;
            assert!((row.heikin_ashi.ha_open - expected).abs() < 1e-9);
        }

        match row.mfi {
            Some(mfi) => {
                assert!(i >= 13);
                assert!((0.0..=100.0).contains(&mfi));
            }
            None => assert!(i < 13),
        }

        assert!(!(row.macd_bullish_cross && row.macd_bearish_cross));
        assert!((row.macd_histogram - (row.macd - row.macd_signal)).abs() < 1e-12);
    }

    assert!(rows.iter().any(|r| r.macd_bullish_cross));
    assert!(rows.iter().any(|r| r.macd_bearish_cross));
}

#[test]
fn test_signal_properties() {
    let bars = create_zigzag_bars(200);
    let config = EngineConfig::default().with_doji_threshold(0.3);
    let rows = SignalEngine::new(config).unwrap().run(&bars);

    for row in &rows {
        assert!((-3..=3).contains(&row.signal_strength));
        match row.signal {
            Signal::Buy => assert!(row.signal_strength > 0),
            Signal::Sell => assert!(row.signal_strength < 0),
            Signal::Hold => assert_eq!(row.signal_strength, 0),
        }
        assert_eq!(row.signal_reason.is_empty(), row.signal == Signal::Hold);
    }
}

#[test]
fn test_deterministic_output() {
    let bars = create_zigzag_bars(150);
    let engine = SignalEngine::default();

    let first = serde_json::to_string(&engine.run(&bars)).unwrap();
    let second = serde_json::to_string(&engine.run(&bars)).unwrap();
    let fresh = serde_json::to_string(&SignalEngine::default().run(&bars)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, fresh);
}

#[test]
fn test_independent_concurrent_runs() {
    let engine = Arc::new(SignalEngine::default());
    let bars = Arc::new(create_zigzag_bars(150));
    let expected = engine.run(&bars);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let bars = Arc::clone(&bars);
            thread::spawn(move || engine.run(&bars))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_run_validated_rejects_unordered_input() {
    let mut bars = create_zigzag_bars(10);
    bars.swap(3, 4);

    let err = SignalEngine::default().run_validated(&bars).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Input(IndicatorError::UnorderedTimestamps { index: 4, .. })
    ));
}

#[test]
fn test_run_validated_accepts_clean_input() {
    let bars = create_zigzag_bars(40);
    let engine = SignalEngine::default();
    assert_eq!(engine.run_validated(&bars).unwrap(), engine.run(&bars));
}

#[test]
fn test_calculate_all_indicators_checks_config() {
    let bars = create_zigzag_bars(10);
    let config = EngineConfig::default().with_mfi_levels(70.0, 30.0);

    let err = calculate_all_indicators(&bars, &config).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Config(ConfigError::ThresholdInversion { .. })
    ));
}

#[test]
fn test_signal_serialization() {
    let bars = create_zigzag_bars(3);
    let rows = SignalEngine::default().run(&bars);
    let json = serde_json::to_value(&rows[0]).unwrap();

    assert_eq!(json["signal"], "HOLD");
    assert_eq!(json["signal_strength"], 0);
    assert_eq!(json["signal_reason"], "");
    assert!(json["mfi"].is_null());
    assert!(json["heikin_ashi"]["ha_open"].is_number());
}
