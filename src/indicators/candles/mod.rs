//! Candlestick transforms: Heikin-Ashi, Doji

pub mod doji;
pub mod heikin_ashi;

pub use doji::*;
pub use heikin_ashi::*;
