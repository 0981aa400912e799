//! Signal analyzer
//!
//! Reads a JSON array of OHLCV bars, runs the signal engine and prints the
//! result as JSON on stdout.
//!
//! Usage: `analyze <bars.json>` (or `BARS_FILE=<bars.json> analyze`).
//! `OUTPUT=rows` prints every annotated bar instead of the summary.

use dotenvy::dotenv;
use nifty_signals::config::{get_environment, EngineConfig};
use nifty_signals::indicators::normalize_bars;
use nifty_signals::logging;
use nifty_signals::models::RawBar;
use nifty_signals::signals::{summarize, SignalEngine};
use std::env;
use std::fs;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let environment = get_environment();
    info!(environment = %environment, "Starting signal analyzer");

    let path = env::args()
        .nth(1)
        .or_else(|| env::var("BARS_FILE").ok())
        .ok_or("usage: analyze <bars.json> (or set BARS_FILE)")?;

    let config = EngineConfig::from_env()?;
    info!(
        doji_threshold = config.doji_threshold,
        mfi_period = config.mfi_period,
        mfi_oversold = config.mfi_oversold,
        mfi_overbought = config.mfi_overbought,
        macd = ?(config.macd_fast, config.macd_slow, config.macd_signal),
        ema_weighting = ?config.ema_weighting,
        "Engine configuration"
    );

    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path, e))?;
    let raw: Vec<RawBar> = serde_json::from_str(&contents)?;
    let raw_count = raw.len();

    let bars = normalize_bars(raw)?;
    if bars.len() < raw_count {
        warn!(
            dropped = raw_count - bars.len(),
            "Dropped bars that could not be forward-filled"
        );
    }
    info!(bars = bars.len(), path = %path, "Loaded bars");

    let engine = SignalEngine::new(config)?;
    let rows = engine.run(&bars);
    let summary = summarize(&rows);

    if let Some(latest) = &summary.latest {
        info!(
            signal = %latest.signal,
            strength = latest.strength,
            reason = %latest.reason,
            close = latest.close,
            "Latest signal"
        );
    }
    info!(
        total = summary.statistics.total_signals,
        buy = summary.statistics.buy_signals,
        sell = summary.statistics.sell_signals,
        doji = summary.statistics.doji_count,
        "Series statistics"
    );

    let output = match env::var("OUTPUT").as_deref() {
        Ok("rows") => serde_json::to_string_pretty(&rows)?,
        _ => serde_json::to_string_pretty(&summary)?,
    };
    println!("{}", output);

    Ok(())
}
