//! Small numeric helpers shared by the indicators.

/// EMA smoothing factor for a span: 2 / (span + 1).
pub fn alpha_from_span(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Arithmetic mean, `None` on empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum of the `period` values ending at `end` (inclusive).
///
/// `None` while fewer than `period` values are available.
pub fn trailing_sum(values: &[f64], end: usize, period: usize) -> Option<f64> {
    if period == 0 || end >= values.len() || end + 1 < period {
        return None;
    }
    Some(values[end + 1 - period..=end].iter().sum())
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
