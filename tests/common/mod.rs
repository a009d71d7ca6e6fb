//! Shared test helpers.

use chrono::NaiveDate;
use tradedesk::domain::entities::trade::TradeDraft;
use tradedesk::domain::values::strategy_tag::StrategyTag;
use tradedesk::TradeDesk;

#[allow(dead_code)]
pub fn setup() -> TradeDesk {
    TradeDesk::new(":memory:").unwrap()
}

pub fn draft(date: &str, asset: &str, profit_loss: f64) -> TradeDraft {
    TradeDraft {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: Some("10:30".into()),
        asset: asset.into(),
        strategy: StrategyTag::Scalping,
        entry: "ST $ 25 / 2R 50".into(),
        stop_loss: None,
        take_profit: None,
        profit_loss,
        notes: None,
    }
}
