pub mod error;
pub mod validation;

pub mod candles;
pub mod macd;
pub mod momentum;
pub mod trend;
pub mod volume;

pub use error::IndicatorError;
pub use validation::*;
