//! MFI (Money Flow Index) indicator

use crate::common::math;
use crate::config::DEFAULT_MFI_PERIOD;
use crate::models::bar::Bar;

/// Money ratio used when the window saw no negative flow.
pub const ZERO_OUTFLOW_MONEY_RATIO: f64 = 100.0;

/// Signed money flow of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoneyFlow {
    pub positive: f64,
    pub negative: f64,
}

/// Split each bar's raw money flow by the direction of its typical price.
///
/// Unchanged typical price, including bar 0, contributes to neither side.
pub fn money_flows(bars: &[Bar]) -> Vec<MoneyFlow> {
    let mut flows = Vec::with_capacity(bars.len());
    let mut prev_typical: Option<f64> = None;

    for bar in bars {
        let typical = bar.typical_price();
        let raw = typical * bar.volume;

        let flow = match prev_typical {
            Some(prev) if typical > prev => MoneyFlow {
                positive: raw,
                negative: 0.0,
            },
            Some(prev) if typical < prev => MoneyFlow {
                positive: 0.0,
                negative: raw,
            },
            _ => MoneyFlow::default(),
        };

        flows.push(flow);
        prev_typical = Some(typical);
    }

    flows
}

/// MFI = 100 - 100 / (1 + positive / negative)
///
/// With no negative flow the money ratio is pinned to
/// [`ZERO_OUTFLOW_MONEY_RATIO`] instead of dividing by zero.
pub fn mfi_from_sums(positive_sum: f64, negative_sum: f64) -> f64 {
    let money_ratio = if negative_sum != 0.0 {
        positive_sum / negative_sum
    } else {
        ZERO_OUTFLOW_MONEY_RATIO
    };
    100.0 - 100.0 / (1.0 + money_ratio)
}

/// Calculate MFI for every bar.
///
/// Entries before index `period - 1` are `None`: the window has not filled.
pub fn calculate_mfi(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let flows = money_flows(bars);
    let positive: Vec<f64> = flows.iter().map(|f| f.positive).collect();
    let negative: Vec<f64> = flows.iter().map(|f| f.negative).collect();

    (0..bars.len())
        .map(|i| {
            let pos = math::trailing_sum(&positive, i, period)?;
            let neg = math::trailing_sum(&negative, i, period)?;
            Some(mfi_from_sums(pos, neg))
        })
        .collect()
}

/// Calculate MFI with default period (14)
pub fn calculate_mfi_default(bars: &[Bar]) -> Vec<Option<f64>> {
    calculate_mfi(bars, DEFAULT_MFI_PERIOD)
}
