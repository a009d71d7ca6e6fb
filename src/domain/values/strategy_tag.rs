use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTag {
    OpeningAuction,
    Scalping,
    Swing,
    DayTrade,
    Other,
}

impl fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyTag::OpeningAuction => write!(f, "opening_auction"),
            StrategyTag::Scalping => write!(f, "scalping"),
            StrategyTag::Swing => write!(f, "swing"),
            StrategyTag::DayTrade => write!(f, "day_trade"),
            StrategyTag::Other => write!(f, "other"),
        }
    }
}

impl FromStr for StrategyTag {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "opening_auction" => Ok(StrategyTag::OpeningAuction),
            "scalping" => Ok(StrategyTag::Scalping),
            "swing" => Ok(StrategyTag::Swing),
            "day_trade" => Ok(StrategyTag::DayTrade),
            "other" => Ok(StrategyTag::Other),
            _ => Err(format!("Unknown strategy tag: {s}")),
        }
    }
}
