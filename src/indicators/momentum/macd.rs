//! MACD (Moving Average Convergence Divergence) indicator

use crate::config::{DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW};
use crate::indicators::trend::{ema_series, EmaWeighting};
use crate::models::bar::Bar;
use crate::models::indicators::MacdPoint;

/// Calculate the MACD series over closing prices.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Every EMA seeds from the first observation, so values exist from bar 0.
pub fn calculate_macd(
    bars: &[Bar],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
    weighting: EmaWeighting,
) -> Vec<MacdPoint> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let fast = ema_series(&closes, fast_span, weighting);
    let slow = ema_series(&closes, slow_span, weighting);

    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = ema_series(&macd_line, signal_span, weighting);

    macd_line
        .iter()
        .zip(&signal_line)
        .map(|(&macd, &signal)| MacdPoint::new(macd, signal))
        .collect()
}

/// Calculate MACD with default spans (12, 26, 9)
pub fn calculate_macd_default(bars: &[Bar]) -> Vec<MacdPoint> {
    calculate_macd(
        bars,
        DEFAULT_MACD_FAST,
        DEFAULT_MACD_SLOW,
        DEFAULT_MACD_SIGNAL,
        EmaWeighting::Recursive,
    )
}
