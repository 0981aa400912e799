//! Engine configuration: defaults, environment overrides and validation.

mod validate;

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::trend::EmaWeighting;

pub use validate::validate_config;

pub const DEFAULT_DOJI_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MFI_PERIOD: usize = 14;
pub const DEFAULT_MFI_OVERSOLD: f64 = 30.0;
pub const DEFAULT_MFI_OVERBOUGHT: f64 = 70.0;
pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("mfi_oversold ({oversold}) must be below mfi_overbought ({overbought})")]
    ThresholdInversion { oversold: f64, overbought: f64 },

    #[error("doji_threshold must be in (0, 1], got {0}")]
    DojiThresholdOutOfRange(f64),

    #[error("{name} must be within [0, 100], got {value}")]
    MfiLevelOutOfRange { name: &'static str, value: f64 },

    #[error("{name} must be at least 1, got {value}")]
    InvalidPeriod { name: &'static str, value: usize },

    #[error("macd_fast ({fast}) must be shorter than macd_slow ({slow})")]
    SpanOrdering { fast: usize, slow: usize },

    #[error("{var}: cannot parse {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Name of the deployment environment (`ENVIRONMENT`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub doji_threshold: f64,
    pub mfi_period: usize,
    pub mfi_oversold: f64,
    pub mfi_overbought: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub ema_weighting: EmaWeighting,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            doji_threshold: DEFAULT_DOJI_THRESHOLD,
            mfi_period: DEFAULT_MFI_PERIOD,
            mfi_oversold: DEFAULT_MFI_OVERSOLD,
            mfi_overbought: DEFAULT_MFI_OVERBOUGHT,
            macd_fast: DEFAULT_MACD_FAST,
            macd_slow: DEFAULT_MACD_SLOW,
            macd_signal: DEFAULT_MACD_SIGNAL,
            ema_weighting: EmaWeighting::Recursive,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by process environment variables, then validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, "DOJI_THRESHOLD")? {
            config.doji_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, "MFI_PERIOD")? {
            config.mfi_period = v;
        }
        if let Some(v) = parse_var(&lookup, "MFI_OVERSOLD")? {
            config.mfi_oversold = v;
        }
        if let Some(v) = parse_var(&lookup, "MFI_OVERBOUGHT")? {
            config.mfi_overbought = v;
        }
        if let Some(v) = parse_var(&lookup, "MACD_FAST")? {
            config.macd_fast = v;
        }
        if let Some(v) = parse_var(&lookup, "MACD_SLOW")? {
            config.macd_slow = v;
        }
        if let Some(v) = parse_var(&lookup, "MACD_SIGNAL")? {
            config.macd_signal = v;
        }
        if let Some(adjust) = parse_var::<bool, _>(&lookup, "EMA_ADJUST")? {
            config.ema_weighting = if adjust {
                EmaWeighting::Adjusted
            } else {
                EmaWeighting::Recursive
            };
        }

        validate_config(&config)?;
        Ok(config)
    }

    pub fn with_doji_threshold(mut self, threshold: f64) -> Self {
        self.doji_threshold = threshold;
        self
    }

    pub fn with_mfi_period(mut self, period: usize) -> Self {
        self.mfi_period = period;
        self
    }

    pub fn with_mfi_levels(mut self, oversold: f64, overbought: f64) -> Self {
        self.mfi_oversold = oversold;
        self.mfi_overbought = overbought;
        self
    }

    pub fn with_macd_spans(mut self, fast: usize, slow: usize, signal: usize) -> Self {
        self.macd_fast = fast;
        self.macd_slow = slow;
        self.macd_signal = signal;
        self
    }

    pub fn with_ema_weighting(mut self, weighting: EmaWeighting) -> Self {
        self.ema_weighting = weighting;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_config(self)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}
