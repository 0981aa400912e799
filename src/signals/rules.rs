//! Prioritised BUY/SELL rule tables and their reduction.

use std::fmt;

use crate::models::indicators::IndicatorRow;
use crate::models::signal::Signal;

/// Boolean facts one bar is classified from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleInputs {
    pub is_doji: bool,
    pub mfi_oversold: bool,
    pub mfi_overbought: bool,
    pub macd_bullish: bool,
    pub macd_bearish: bool,
}

impl RuleInputs {
    /// Derive the facts from an indicator row. An unavailable MFI is
    /// neither oversold nor overbought.
    pub fn from_row(row: &IndicatorRow, oversold: f64, overbought: f64) -> Self {
        Self {
            is_doji: row.is_doji,
            mfi_oversold: row.is_mfi_below(oversold),
            mfi_overbought: row.is_mfi_above(overbought),
            macd_bullish: row.macd_bullish_cross,
            macd_bearish: row.macd_bearish_cross,
        }
    }
}

/// One row of a priority table.
#[derive(Clone, Copy)]
pub struct SignalRule {
    pub signal: Signal,
    pub strength: i8,
    pub reason: &'static str,
    predicate: fn(&RuleInputs) -> bool,
}

impl fmt::Debug for SignalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalRule")
            .field("signal", &self.signal)
            .field("strength", &self.strength)
            .field("reason", &self.reason)
            .finish()
    }
}

impl SignalRule {
    pub fn matches(&self, inputs: &RuleInputs) -> bool {
        (self.predicate)(inputs)
    }
}

/// Highest priority first.
pub const BUY_RULES: [SignalRule; 4] = [
    SignalRule {
        signal: Signal::Buy,
        strength: 3,
        reason: "Doji + Oversold MFI + MACD Bullish",
        predicate: |i| i.is_doji && i.mfi_oversold && i.macd_bullish,
    },
    SignalRule {
        signal: Signal::Buy,
        strength: 2,
        reason: "Doji + Oversold MFI",
        predicate: |i| i.is_doji && i.mfi_oversold && !i.macd_bullish,
    },
    SignalRule {
        signal: Signal::Buy,
        strength: 2,
        reason: "Doji + MACD Bullish",
        predicate: |i| i.is_doji && i.macd_bullish && !i.mfi_oversold,
    },
    SignalRule {
        signal: Signal::Buy,
        strength: 1,
        reason: "Oversold MFI + MACD Bullish",
        predicate: |i| !i.is_doji && i.mfi_oversold && i.macd_bullish,
    },
];

/// Highest priority first.
pub const SELL_RULES: [SignalRule; 4] = [
    SignalRule {
        signal: Signal::Sell,
        strength: -3,
        reason: "Doji + Overbought MFI + MACD Bearish",
        predicate: |i| i.is_doji && i.mfi_overbought && i.macd_bearish,
    },
    SignalRule {
        signal: Signal::Sell,
        strength: -2,
        reason: "Doji + Overbought MFI",
        predicate: |i| i.is_doji && i.mfi_overbought && !i.macd_bearish,
    },
    SignalRule {
        signal: Signal::Sell,
        strength: -2,
        reason: "Doji + MACD Bearish",
        predicate: |i| i.is_doji && i.macd_bearish && !i.mfi_overbought,
    },
    SignalRule {
        signal: Signal::Sell,
        strength: -1,
        reason: "Overbought MFI + MACD Bearish",
        predicate: |i| !i.is_doji && i.mfi_overbought && i.macd_bearish,
    },
];

/// Outcome of classifying one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub signal: Signal,
    pub strength: i8,
    pub reason: &'static str,
}

impl Classification {
    pub const HOLD: Classification = Classification {
        signal: Signal::Hold,
        strength: 0,
        reason: "",
    };
}

impl Default for Classification {
    fn default() -> Self {
        Self::HOLD
    }
}

/// Reduce both tables against a running best match.
///
/// A BUY rule replaces the current result only when it is strictly
/// stronger; a SELL rule only when it is strictly more negative. SELL rules
/// are applied after BUY rules, so a firing SELL rule always wins.
pub fn classify(inputs: &RuleInputs) -> Classification {
    let after_buy = BUY_RULES.iter().fold(Classification::HOLD, |best, rule| {
        if rule.matches(inputs) && rule.strength > best.strength {
            rule.into()
        } else {
            best
        }
    });

    SELL_RULES.iter().fold(after_buy, |best, rule| {
        if rule.matches(inputs) && rule.strength < best.strength {
            rule.into()
        } else {
            best
        }
    })
}

impl From<&SignalRule> for Classification {
    fn from(rule: &SignalRule) -> Self {
        Self {
            signal: rule.signal,
            strength: rule.strength,
            reason: rule.reason,
        }
    }
}
