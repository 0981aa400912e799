use chrono::{DateTime, Utc};
use thiserror::Error;

/// Input contract violations detected by the bar validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("bar {index}: timestamp {timestamp} is earlier than its predecessor")]
    UnorderedTimestamps {
        index: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("bar {index}: duplicate timestamp {timestamp}")]
    DuplicateTimestamp {
        index: usize,
        timestamp: DateTime<Utc>,
    },

    #[error("bar {index}: {field} is not a finite number")]
    NonFiniteValue { index: usize, field: &'static str },

    #[error("bar {index}: {field} must be positive, got {value}")]
    NonPositivePrice {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("bar {index}: volume must be non-negative, got {value}")]
    NegativeVolume { index: usize, value: f64 },

    #[error("bar {index}: high {high} is below low {low}")]
    HighBelowLow { index: usize, high: f64, low: f64 },

    #[error("no complete bars left after normalization ({dropped} dropped)")]
    EmptyAfterNormalization { dropped: usize },
}
