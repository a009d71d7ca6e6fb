use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Breakeven,
}

impl Outcome {
    /// Classify a signed profit figure. Zero is breakeven and counts
    /// toward neither wins nor losses.
    pub fn from_profit(profit_loss: f64) -> Self {
        if profit_loss > 0.0 {
            Outcome::Win
        } else if profit_loss < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Breakeven
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Breakeven => write!(f, "breakeven"),
        }
    }
}
