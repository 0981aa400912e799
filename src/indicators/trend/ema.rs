//! EMA (Exponential Moving Average) indicator

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::models::bar::Bar;

/// How past observations are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmaWeighting {
    /// EMA[0] = x[0]; EMA[i] = a * x[i] + (1 - a) * EMA[i - 1]
    #[default]
    Recursive,
    /// Weighted mean of all observations with weights (1 - a)^k normalised
    /// by their sum, which removes the bias towards the first value.
    Adjusted,
}

/// EMA of `values` for every index, seeded from the first observation.
///
/// A span of 0 is treated as 1 (no smoothing).
pub fn ema_series(values: &[f64], span: usize, weighting: EmaWeighting) -> Vec<f64> {
    let alpha = math::alpha_from_span(span.max(1));
    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(values.len());

    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return out;
    };

    let mut ema = first;
    // Running sum of weights for the adjusted form.
    let mut weight_sum = 1.0;
    out.push(ema);

    for value in iter {
        match weighting {
            EmaWeighting::Recursive => {
                ema = alpha * value + decay * ema;
            }
            EmaWeighting::Adjusted => {
                weight_sum = 1.0 + decay * weight_sum;
                ema += (value - ema) / weight_sum;
            }
        }
        out.push(ema);
    }

    out
}

/// EMA of closing prices.
pub fn calculate_ema(bars: &[Bar], span: usize, weighting: EmaWeighting) -> Vec<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    ema_series(&closes, span, weighting)
}
