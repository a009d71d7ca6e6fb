pub mod outcome;
pub mod strategy_tag;
pub mod week_key;
