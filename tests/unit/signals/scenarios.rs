//! Integration tests for market scenarios

use chrono::{DateTime, Duration, TimeZone, Utc};
use nifty_signals::config::EngineConfig;
use nifty_signals::models::{Bar, Signal};
use nifty_signals::signals::engine::SignalEngine;

fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 9, 15, 0).unwrap() + Duration::days(i as i64)
}

fn short_window_engine() -> SignalEngine {
    SignalEngine::new(EngineConfig::default().with_mfi_period(2)).unwrap()
}

#[test]
fn test_strong_buy_after_trough() {
    // Two flat bars build EMA state; the third dips intrabar on heavy
    // volume, closes slightly higher and has a zero-body Heikin-Ashi candle.
    let bars = vec![
        Bar::new(100.0, 101.0, 99.0, 100.0, 1000.0, ts(0)),
        Bar::new(100.0, 101.0, 99.0, 100.0, 1000.0, ts(1)),
        Bar::new(100.5, 104.0, 95.0, 100.5, 5000.0, ts(2)),
    ];

    let rows = short_window_engine().run(&bars);
    let last = &rows[2];

    assert!(last.indicators.is_doji);
    assert_eq!(last.indicators.mfi, Some(0.0));
    assert!(last.indicators.macd_bullish_cross);
    assert!(!last.indicators.macd_bearish_cross);

    assert_eq!(last.signal, Signal::Buy);
    assert_eq!(last.signal_strength, 3);
    assert_eq!(last.signal_reason, "Doji + Oversold MFI + MACD Bullish");

    assert_eq!(rows[0].signal, Signal::Hold);
}

#[test]
fn test_strong_sell_after_peak() {
    let bars = vec![
        Bar::new(100.0, 100.0, 100.0, 100.0, 1000.0, ts(0)),
        Bar::new(100.0, 101.0, 100.0, 101.0, 1000.0, ts(1)),
        Bar::new(97.0, 110.0, 95.0, 99.0, 5000.0, ts(2)),
    ];

    let rows = short_window_engine().run(&bars);

    assert!(rows[1].indicators.macd_bullish_cross);
    assert_eq!(rows[1].signal, Signal::Hold);

    let last = &rows[2];
    assert!(last.indicators.is_doji);
    assert!(last.indicators.mfi.unwrap() > 70.0);
    assert!(last.indicators.macd_bearish_cross);

    assert_eq!(last.signal, Signal::Sell);
    assert_eq!(last.signal_strength, -3);
    assert_eq!(last.signal_reason, "Doji + Overbought MFI + MACD Bearish");
}

#[test]
fn test_flat_series() {
    let bars: Vec<Bar> = (0..30)
        .map(|i| Bar::new(100.0, 100.0, 100.0, 100.0, 1000.0, ts(i)))
        .collect();

    let rows = SignalEngine::default().run(&bars);
    let zero_outflow_mfi = 100.0 - 100.0 / 101.0;

    for (i, row) in rows.iter().enumerate() {
        let ind = &row.indicators;
        assert_eq!(ind.macd, 0.0);
        assert_eq!(ind.macd_histogram, 0.0);
        assert!(ind.is_doji);
        assert!(!ind.macd_bullish_cross && !ind.macd_bearish_cross);

        if i < 13 {
            assert!(ind.mfi.is_none());
            assert_eq!(row.signal, Signal::Hold);
            assert!(row.signal_reason.is_empty());
        } else {
            // No outflow pins the money ratio, so the flat tape reads as
            // overbought and the Doji rule fires.
            assert!((ind.mfi.unwrap() - zero_outflow_mfi).abs() < 1e-12);
            assert_eq!(row.signal, Signal::Sell);
            assert_eq!(row.signal_strength, -2);
            assert_eq!(row.signal_reason, "Doji + Overbought MFI");
        }
    }
}

#[test]
fn test_flat_series_holds_without_mfi() {
    let bars: Vec<Bar> = (0..30)
        .map(|i| Bar::new(100.0, 100.0, 100.0, 100.0, 1000.0, ts(i)))
        .collect();

    let engine = SignalEngine::new(EngineConfig::default().with_mfi_period(40)).unwrap();
    assert!(engine.run(&bars).iter().all(|r| r.signal == Signal::Hold));
}

#[test]
fn test_zero_volume_tape() {
    let bars: Vec<Bar> = (0..20)
        .map(|i| {
            let close = 100.0 - i as f64 * 0.5;
            Bar::new(close + 0.25, close + 1.0, close - 1.0, close, 0.0, ts(i))
        })
        .collect();

    let rows = SignalEngine::default().run(&bars);
    for row in rows.iter().skip(13) {
        // Falling prices but no traded volume: no outflow is recorded.
        assert!((row.indicators.mfi.unwrap() - (100.0 - 100.0 / 101.0)).abs() < 1e-12);
    }
}
