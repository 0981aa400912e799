use crate::indicators::macd::evaluation::CrossoverType;
use crate::models::indicators::MacdPoint;

/// Classify the transition between two consecutive bars.
///
/// Bullish when MACD moves from at-or-below the signal line to above it,
/// bearish for the reverse. Undefined lines count as "not above".
pub fn detect_crossover(previous: &MacdPoint, current: &MacdPoint) -> CrossoverType {
    match (previous.is_above_signal(), current.is_above_signal()) {
        (false, true) => CrossoverType::Bullish,
        (true, false) => CrossoverType::Bearish,
        _ => CrossoverType::None,
    }
}

/// Crossover per bar, aligned with `points`. Bar 0 is always `None`.
pub fn detect_crossovers(points: &[MacdPoint]) -> Vec<CrossoverType> {
    let mut crossovers = Vec::with_capacity(points.len());
    if points.is_empty() {
        return crossovers;
    }

    crossovers.push(CrossoverType::None);
    crossovers.extend(
        points
            .windows(2)
            .map(|pair| detect_crossover(&pair[0], &pair[1])),
    );
    crossovers
}
