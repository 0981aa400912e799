//! Heikin-Ashi Doji, Money Flow Index and MACD signal engine.
//!
//! The engine turns one ordered OHLCV series into per-bar indicator rows and
//! a BUY/SELL/HOLD classification with an integer strength in `-3..=3`.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
pub use models::{Bar, HeikinAshiBar, IndicatorRow, RawBar, Signal, SignalRow};
pub use signals::{calculate_all_indicators, summarize, SignalEngine};
