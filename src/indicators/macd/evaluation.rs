use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    #[default]
    None,
}

impl CrossoverType {
    pub fn is_bullish(&self) -> bool {
        matches!(self, CrossoverType::Bullish)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, CrossoverType::Bearish)
    }
}
