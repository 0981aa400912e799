use serde::{Deserialize, Serialize};

use crate::models::bar::Bar;

/// Smoothed synthetic candle derived from a raw bar and its predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeikinAshiBar {
    pub ha_open: f64,
    pub ha_high: f64,
    pub ha_low: f64,
    pub ha_close: f64,
}

impl HeikinAshiBar {
    /// |ha_close - ha_open|
    pub fn body(&self) -> f64 {
        (self.ha_close - self.ha_open).abs()
    }

    /// ha_high - ha_low
    pub fn range(&self) -> f64 {
        self.ha_high - self.ha_low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdPoint {
    pub fn new(macd: f64, signal: f64) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    /// False when either line is NaN.
    pub fn is_above_signal(&self) -> bool {
        self.macd > self.signal
    }
}

/// Full feature vector for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub bar: Bar,
    pub heikin_ashi: HeikinAshiBar,
    pub is_doji: bool,
    /// `None` until the MFI window has filled.
    pub mfi: Option<f64>,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub macd_bullish_cross: bool,
    pub macd_bearish_cross: bool,
}

impl IndicatorRow {
    pub fn is_mfi_below(&self, level: f64) -> bool {
        self.mfi.is_some_and(|mfi| mfi < level)
    }

    pub fn is_mfi_above(&self, level: f64) -> bool {
        self.mfi.is_some_and(|mfi| mfi > level)
    }
}
