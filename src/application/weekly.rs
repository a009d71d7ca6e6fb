use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::outcome::Outcome;
use crate::domain::values::week_key::{week_start, WeekKey};
use chrono::Duration;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// One Sunday-to-Saturday bucket of trades with its rollup figures.
/// Recomputed from scratch on every call, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct WeekGroup {
    pub key: WeekKey,
    pub label: String,
    pub date_range: String,
    pub trades: Vec<Trade>,
    pub total_profit: f64,
    pub win_count: usize,
    pub loss_count: usize,
}

/// Partition `trades` into week buckets and compute per-bucket stats.
///
/// `filter_text` keeps only trades whose asset contains it as a
/// case-insensitive substring; an empty filter keeps everything. Trades
/// are stable-sorted newest-first before bucketing, so members of each
/// group keep that order and same-date trades keep their input order.
/// Groups come out newest week first. Pure function: same input, same
/// output, no I/O.
pub fn group_by_week(mut trades: Vec<Trade>, filter_text: &str) -> Vec<WeekGroup> {
    if !filter_text.is_empty() {
        let needle = filter_text.to_lowercase();
        trades.retain(|t| t.asset.to_lowercase().contains(&needle));
    }
    trades.sort_by(|a, b| b.date.cmp(&a.date));

    let mut buckets: HashMap<WeekKey, WeekGroup> = HashMap::new();
    for trade in trades {
        let key = WeekKey::for_date(trade.date);
        let group = buckets.entry(key).or_insert_with(|| {
            let start = week_start(trade.date);
            let end = start + Duration::days(6);
            WeekGroup {
                key,
                label: format!("Week {:02}", key.number),
                date_range: format!(
                    "{} - {}",
                    start.format("%d/%m/%Y"),
                    end.format("%d/%m/%Y")
                ),
                trades: Vec::new(),
                total_profit: 0.0,
                win_count: 0,
                loss_count: 0,
            }
        });
        group.total_profit += trade.profit_loss;
        match trade.outcome() {
            Outcome::Win => group.win_count += 1,
            Outcome::Loss => group.loss_count += 1,
            Outcome::Breakeven => {}
        }
        group.trades.push(trade);
    }

    let mut groups: Vec<WeekGroup> = buckets.into_values().collect();
    groups.sort_by(|a, b| b.key.cmp(&a.key));
    groups
}

pub struct WeeklyUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl WeeklyUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    pub fn report(
        &self,
        owner_id: Option<&str>,
        filter_text: &str,
    ) -> Result<Vec<WeekGroup>, DomainError> {
        let trades = self.repo.list_trades(&TradeFilter {
            owner_id: owner_id.map(String::from),
            ..TradeFilter::default()
        })?;
        Ok(group_by_week(trades, filter_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::trade::TradeDraft;
    use crate::domain::values::strategy_tag::StrategyTag;
    use chrono::NaiveDate;

    fn trade(date: &str, asset: &str, profit_loss: f64) -> Trade {
        Trade::create(
            "ana".into(),
            TradeDraft {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                time: None,
                asset: asset.into(),
                strategy: StrategyTag::DayTrade,
                entry: "2R".into(),
                stop_loss: None,
                take_profit: None,
                profit_loss,
                notes: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input_empty_output() {
        assert!(group_by_week(Vec::new(), "").is_empty());
    }

    #[test]
    fn test_members_keep_newest_first_order() {
        let groups = group_by_week(
            vec![
                trade("2024-06-03", "XAUUSD", 100.0),
                trade("2024-06-05", "HK50", -40.0),
            ],
            "",
        );
        assert_eq!(groups.len(), 1);
        let dates: Vec<String> = groups[0].trades.iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-06-05", "2024-06-03"]);
    }

    #[test]
    fn test_breakeven_increments_neither_counter() {
        let groups = group_by_week(vec![trade("2024-06-03", "XAUUSD", 0.0)], "");
        assert_eq!(groups[0].win_count, 0);
        assert_eq!(groups[0].loss_count, 0);
        assert_eq!(groups[0].total_profit, 0.0);
        assert_eq!(groups[0].trades.len(), 1);
    }

    #[test]
    fn test_label_and_range_follow_week_start() {
        let groups = group_by_week(vec![trade("2024-06-03", "XAUUSD", 5.0)], "");
        assert_eq!(groups[0].label, "Week 22");
        assert_eq!(groups[0].date_range, "02/06/2024 - 08/06/2024");
    }
}
