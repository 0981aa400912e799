//! Signal classification and per-series summaries.

pub mod engine;
pub mod rules;
pub mod summary;

pub use engine::*;
pub use rules::*;
pub use summary::*;
