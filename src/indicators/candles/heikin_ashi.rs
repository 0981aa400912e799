//! Heikin-Ashi candle transform

use crate::models::bar::Bar;
use crate::models::indicators::HeikinAshiBar;

/// Calculate Heikin-Ashi candles, one per input bar.
///
/// ha_close = (open + high + low + close) / 4
/// ha_open  = (open + close) / 2 on the first bar, then the midpoint of the
///            previous synthetic candle's open and close
/// ha_high  = max(high, ha_open, ha_close)
/// ha_low   = min(low, ha_open, ha_close)
///
/// Every ha_open depends on the whole prefix, so this is one forward pass.
pub fn calculate_heikin_ashi(bars: &[Bar]) -> Vec<HeikinAshiBar> {
    let mut out = Vec::with_capacity(bars.len());
    let mut previous: Option<(f64, f64)> = None;

    for bar in bars {
        let ha_close = (bar.open + bar.high + bar.low + bar.close) / 4.0;
        let ha_open = match previous {
            Some((prev_open, prev_close)) => (prev_open + prev_close) / 2.0,
            None => (bar.open + bar.close) / 2.0,
        };

        out.push(HeikinAshiBar {
            ha_open,
            ha_high: bar.high.max(ha_open).max(ha_close),
            ha_low: bar.low.min(ha_open).min(ha_close),
            ha_close,
        });
        previous = Some((ha_open, ha_close));
    }

    out
}
