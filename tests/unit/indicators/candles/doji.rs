//! Unit tests for Doji detection

use nifty_signals::indicators::candles::{
    body_ratio, detect_doji_candles, detect_doji_candles_default, is_doji,
};
use nifty_signals::models::HeikinAshiBar;

fn candle(open: f64, high: f64, low: f64, close: f64) -> HeikinAshiBar {
    HeikinAshiBar {
        ha_open: open,
        ha_high: high,
        ha_low: low,
        ha_close: close,
    }
}

#[test]
fn test_zero_body_is_always_doji() {
    let c = candle(100.0, 105.0, 95.0, 100.0);
    assert_eq!(body_ratio(&c), 0.0);
    assert!(is_doji(&c, 0.001));
}

#[test]
fn test_zero_range_falls_back_to_zero_ratio() {
    let c = candle(100.0, 100.0, 100.0, 100.0);
    assert_eq!(body_ratio(&c), 0.0);
    assert!(is_doji(&c, 0.1));
}

#[test]
fn test_threshold_is_inclusive() {
    let c = candle(100.0, 102.0, 98.0, 101.0);
    assert_eq!(body_ratio(&c), 0.25);
    assert!(!is_doji(&c, 0.1));
    assert!(is_doji(&c, 0.25));
}

#[test]
fn test_detect_doji_candles() {
    let candles = vec![
        candle(100.0, 110.0, 90.0, 100.5),
        candle(100.0, 104.0, 96.0, 104.0),
        candle(100.0, 100.0, 100.0, 100.0),
    ];
    assert_eq!(detect_doji_candles(&candles, 0.1), vec![true, false, true]);
    assert_eq!(detect_doji_candles_default(&candles), vec![true, false, true]);
    assert!(detect_doji_candles(&[], 0.1).is_empty());
}
