//! Per-series statistics and latest-bar snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::models::signal::{Signal, SignalRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub data_points: usize,
    pub total_signals: usize,
    pub buy_signals: usize,
    pub sell_signals: usize,
    pub doji_count: usize,
    /// Percent of bars with a BUY or SELL.
    pub signal_rate: f64,
    /// Percent of BUY/SELL bars that are BUY.
    pub buy_rate: f64,
    pub sell_rate: f64,
    pub doji_rate: f64,
    /// Mean |strength| over BUY/SELL bars.
    pub avg_signal_strength: f64,
}

impl SeriesStatistics {
    pub fn from_rows(rows: &[SignalRow]) -> Self {
        let data_points = rows.len();
        let buy_signals = rows.iter().filter(|r| r.signal == Signal::Buy).count();
        let sell_signals = rows.iter().filter(|r| r.signal == Signal::Sell).count();
        let total_signals = buy_signals + sell_signals;
        let doji_count = rows.iter().filter(|r| r.indicators.is_doji).count();

        let strengths: Vec<f64> = rows
            .iter()
            .filter(|r| r.is_actionable())
            .map(|r| f64::from(r.signal_strength.unsigned_abs()))
            .collect();

        Self {
            data_points,
            total_signals,
            buy_signals,
            sell_signals,
            doji_count,
            signal_rate: math::percent(total_signals, data_points),
            buy_rate: math::percent(buy_signals, total_signals),
            sell_rate: math::percent(sell_signals, total_signals),
            doji_rate: math::percent(doji_count, data_points),
            avg_signal_strength: math::mean(&strengths).unwrap_or(0.0),
        }
    }
}

/// Snapshot of the most recent bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSignal {
    pub timestamp: DateTime<Utc>,
    pub signal: Signal,
    pub strength: i8,
    pub reason: String,
    pub close: f64,
    pub ha_close: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub mfi: Option<f64>,
    pub is_doji: bool,
    /// Close-to-close change versus the previous bar.
    pub change: f64,
    pub change_percent: f64,
}

impl LatestSignal {
    pub fn from_rows(rows: &[SignalRow]) -> Option<Self> {
        let latest = rows.last()?;
        let row = &latest.indicators;
        let previous_close = rows
            .len()
            .checked_sub(2)
            .map(|i| rows[i].indicators.bar.close)
            .unwrap_or(row.bar.close);

        let change = row.bar.close - previous_close;
        let change_percent = if previous_close != 0.0 {
            change / previous_close * 100.0
        } else {
            0.0
        };

        Some(Self {
            timestamp: row.bar.timestamp,
            signal: latest.signal,
            strength: latest.signal_strength,
            reason: latest.signal_reason.clone(),
            close: row.bar.close,
            ha_close: row.heikin_ashi.ha_close,
            macd: row.macd,
            macd_signal: row.macd_signal,
            mfi: row.mfi,
            is_doji: row.is_doji,
            change,
            change_percent,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub latest: Option<LatestSignal>,
    pub statistics: SeriesStatistics,
}

pub fn summarize(rows: &[SignalRow]) -> SeriesSummary {
    SeriesSummary {
        latest: LatestSignal::from_rows(rows),
        statistics: SeriesStatistics::from_rows(rows),
    }
}
