//! Doji detection on Heikin-Ashi candles

use crate::config::DEFAULT_DOJI_THRESHOLD;
use crate::models::indicators::HeikinAshiBar;

/// Body size relative to the high-low range.
///
/// A zero-range candle reports 0, which makes it a Doji for any threshold.
pub fn body_ratio(candle: &HeikinAshiBar) -> f64 {
    let range = candle.range();
    if range != 0.0 {
        candle.body() / range
    } else {
        0.0
    }
}

pub fn is_doji(candle: &HeikinAshiBar, threshold: f64) -> bool {
    body_ratio(candle) <= threshold
}

/// Doji flag per candle.
pub fn detect_doji_candles(candles: &[HeikinAshiBar], threshold: f64) -> Vec<bool> {
    candles.iter().map(|c| is_doji(c, threshold)).collect()
}

/// Detect Doji candles with the default threshold (0.1)
pub fn detect_doji_candles_default(candles: &[HeikinAshiBar]) -> Vec<bool> {
    detect_doji_candles(candles, DEFAULT_DOJI_THRESHOLD)
}
