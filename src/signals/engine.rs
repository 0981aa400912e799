//! Indicator and signal engine over one ordered bar sequence.

use tracing::debug;

use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::indicators::candles::{calculate_heikin_ashi, detect_doji_candles};
use crate::indicators::macd::detect_crossovers;
use crate::indicators::momentum::calculate_macd;
use crate::indicators::validation::validate_bars;
use crate::indicators::volume::calculate_mfi;
use crate::models::bar::Bar;
use crate::models::indicators::IndicatorRow;
use crate::models::signal::SignalRow;
use crate::signals::rules::{classify, RuleInputs};

/// Validated configuration bound to the indicator pipeline.
///
/// Holds no per-run state; one engine can serve any number of series,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    config: EngineConfig,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Heikin-Ashi, Doji, MFI and MACD for every bar.
    pub fn compute_indicators(&self, bars: &[Bar]) -> Vec<IndicatorRow> {
        let config = &self.config;

        let heikin_ashi = calculate_heikin_ashi(bars);
        let doji = detect_doji_candles(&heikin_ashi, config.doji_threshold);
        let mfi = calculate_mfi(bars, config.mfi_period);
        let macd = calculate_macd(
            bars,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
            config.ema_weighting,
        );
        let crossovers = detect_crossovers(&macd);

        debug!(
            bars = bars.len(),
            doji = doji.iter().filter(|d| **d).count(),
            mfi_available = mfi.iter().filter(|m| m.is_some()).count(),
            crossovers = crossovers.iter().filter(|c| c.is_bullish() || c.is_bearish()).count(),
            "computed indicators"
        );

        bars.iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                bar: *bar,
                heikin_ashi: heikin_ashi[i],
                is_doji: doji[i],
                mfi: mfi[i],
                macd: macd[i].macd,
                macd_signal: macd[i].signal,
                macd_histogram: macd[i].histogram,
                macd_bullish_cross: crossovers[i].is_bullish(),
                macd_bearish_cross: crossovers[i].is_bearish(),
            })
            .collect()
    }

    /// Classify one indicator row.
    pub fn classify_row(&self, row: IndicatorRow) -> SignalRow {
        let inputs =
            RuleInputs::from_row(&row, self.config.mfi_oversold, self.config.mfi_overbought);
        let classification = classify(&inputs);

        SignalRow {
            indicators: row,
            signal: classification.signal,
            signal_strength: classification.strength,
            signal_reason: classification.reason.to_string(),
        }
    }

    /// Annotate every bar with indicators and a signal.
    ///
    /// `bars` must already satisfy the input contract; nothing is re-checked
    /// here. Use [`SignalEngine::run_validated`] for untrusted input.
    pub fn run(&self, bars: &[Bar]) -> Vec<SignalRow> {
        let rows: Vec<SignalRow> = self
            .compute_indicators(bars)
            .into_iter()
            .map(|row| self.classify_row(row))
            .collect();

        debug!(
            bars = rows.len(),
            actionable = rows.iter().filter(|r| r.is_actionable()).count(),
            "classified signals"
        );

        rows
    }

    /// Validate the bar sequence, then [`SignalEngine::run`].
    pub fn run_validated(&self, bars: &[Bar]) -> Result<Vec<SignalRow>, EngineError> {
        validate_bars(bars)?;
        Ok(self.run(bars))
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

/// One-shot helper: validate the configuration and run the engine.
pub fn calculate_all_indicators(
    bars: &[Bar],
    config: &EngineConfig,
) -> Result<Vec<SignalRow>, EngineError> {
    let engine = SignalEngine::new(config.clone())?;
    Ok(engine.run(bars))
}
