use super::{ConfigError, EngineConfig};

/// Check invariants serde alone cannot enforce.
///
/// Returns the first violation found, in field order.
pub fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    validate_doji(config)?;
    validate_mfi(config)?;
    validate_macd(config)
}

fn validate_doji(config: &EngineConfig) -> Result<(), ConfigError> {
    let threshold = config.doji_threshold;
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(ConfigError::DojiThresholdOutOfRange(threshold));
    }
    Ok(())
}

fn validate_mfi(config: &EngineConfig) -> Result<(), ConfigError> {
    if config.mfi_period == 0 {
        return Err(ConfigError::InvalidPeriod {
            name: "mfi_period",
            value: config.mfi_period,
        });
    }

    let levels = [
        ("mfi_oversold", config.mfi_oversold),
        ("mfi_overbought", config.mfi_overbought),
    ];
    for (name, value) in levels {
        if !(0.0..=100.0).contains(&value) {
            return Err(ConfigError::MfiLevelOutOfRange { name, value });
        }
    }

    // Both predicates could fire on one bar otherwise.
    if config.mfi_oversold >= config.mfi_overbought {
        return Err(ConfigError::ThresholdInversion {
            oversold: config.mfi_oversold,
            overbought: config.mfi_overbought,
        });
    }
    Ok(())
}

fn validate_macd(config: &EngineConfig) -> Result<(), ConfigError> {
    let spans = [
        ("macd_fast", config.macd_fast),
        ("macd_slow", config.macd_slow),
        ("macd_signal", config.macd_signal),
    ];
    for (name, value) in spans {
        if value == 0 {
            return Err(ConfigError::InvalidPeriod { name, value });
        }
    }

    if config.macd_fast >= config.macd_slow {
        return Err(ConfigError::SpanOrdering {
            fast: config.macd_fast,
            slow: config.macd_slow,
        });
    }
    Ok(())
}
