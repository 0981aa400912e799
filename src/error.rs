use thiserror::Error;

use crate::config::ConfigError;
use crate::indicators::IndicatorError;

/// Top-level error returned by the checked engine entry points.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] IndicatorError),
}
