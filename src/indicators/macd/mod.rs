pub mod evaluation;
pub mod evaluator;

pub use evaluation::CrossoverType;
pub use evaluator::*;
