//! Bar validation and normalization ahead of the engine.

use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::models::bar::{Bar, RawBar};

/// Check a bar sequence against the engine's input contract.
///
/// Reports the first offending bar. An empty sequence is valid.
pub fn validate_bars(bars: &[Bar]) -> Result<(), IndicatorError> {
    for (index, bar) in bars.iter().enumerate() {
        validate_bar(index, bar)?;

        if index > 0 {
            let prev = bars[index - 1].timestamp;
            if bar.timestamp == prev {
                return Err(IndicatorError::DuplicateTimestamp {
                    index,
                    timestamp: bar.timestamp,
                });
            }
            if bar.timestamp < prev {
                return Err(IndicatorError::UnorderedTimestamps {
                    index,
                    timestamp: bar.timestamp,
                });
            }
        }
    }
    Ok(())
}

pub fn validate_bar(index: usize, bar: &Bar) -> Result<(), IndicatorError> {
    let prices = [
        ("open", bar.open),
        ("high", bar.high),
        ("low", bar.low),
        ("close", bar.close),
    ];

    for (field, value) in prices {
        if !value.is_finite() {
            return Err(IndicatorError::NonFiniteValue { index, field });
        }
        if value <= 0.0 {
            return Err(IndicatorError::NonPositivePrice {
                index,
                field,
                value,
            });
        }
    }

    if !bar.volume.is_finite() {
        return Err(IndicatorError::NonFiniteValue {
            index,
            field: "volume",
        });
    }
    if bar.volume < 0.0 {
        return Err(IndicatorError::NegativeVolume {
            index,
            value: bar.volume,
        });
    }

    if bar.high < bar.low {
        return Err(IndicatorError::HighBelowLow {
            index,
            high: bar.high,
            low: bar.low,
        });
    }

    Ok(())
}

/// Turn upstream records into an engine-ready sequence.
///
/// Sorts by timestamp (stable), forward-fills missing or non-finite fields
/// from the previous complete bar, drops leading rows that cannot be filled,
/// then validates the result. Duplicate timestamps are rejected rather than
/// merged.
pub fn normalize_bars(raw: Vec<RawBar>) -> Result<Vec<Bar>, IndicatorError> {
    let total = raw.len();
    let mut raw = raw;
    raw.sort_by_key(|r| r.timestamp);

    let mut bars: Vec<Bar> = Vec::with_capacity(total);
    let mut dropped = 0usize;
    let mut filled = 0usize;

    for record in &raw {
        let fields = [
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ];
        let fallback = bars.last().map(|p| [p.open, p.high, p.low, p.close, p.volume]);

        let mut values = [0.0f64; 5];
        let mut complete = true;
        for (i, (slot, value)) in values.iter_mut().zip(fields).enumerate() {
            match (value.filter(|v| v.is_finite()), fallback) {
                (Some(v), _) => *slot = v,
                (None, Some(prev)) => {
                    *slot = prev[i];
                    filled += 1;
                }
                (None, None) => complete = false,
            }
        }

        if !complete {
            dropped += 1;
            continue;
        }

        let [open, high, low, close, volume] = values;
        bars.push(Bar::new(open, high, low, close, volume, record.timestamp));
    }

    if bars.is_empty() && total > 0 {
        return Err(IndicatorError::EmptyAfterNormalization { dropped });
    }

    debug!(
        input = total,
        output = bars.len(),
        dropped,
        filled,
        "normalized bar sequence"
    );

    validate_bars(&bars)?;
    Ok(bars)
}
