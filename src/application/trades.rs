use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use std::sync::Arc;

pub struct TradeUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl TradeUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    pub fn create(&self, owner_id: &str, draft: TradeDraft) -> Result<Trade, DomainError> {
        let trade = Trade::create(owner_id.to_string(), draft)?;
        self.repo.add_trade(&trade)?;
        Ok(trade)
    }

    pub fn update(&self, id: &str, draft: TradeDraft) -> Result<Trade, DomainError> {
        let mut trade = self
            .repo
            .get_trade(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))?;
        trade.revise(draft)?;
        self.repo.update_trade(&trade)?;
        Ok(trade)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete_trade(id)
    }

    pub fn get(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        self.repo.get_trade(id)
    }

    pub fn list(&self, filter: TradeFilter) -> Result<Vec<Trade>, DomainError> {
        self.repo.list_trades(&filter)
    }
}
