//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod signal;

pub use bar::{Bar, RawBar};
pub use indicators::{HeikinAshiBar, IndicatorRow, MacdPoint};
pub use signal::{Signal, SignalRow};
