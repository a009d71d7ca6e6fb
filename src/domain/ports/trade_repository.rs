use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub owner_id: Option<String>,
    pub asset: Option<String>,
    pub limit: Option<usize>,
}

pub trait TradeRepository: Send + Sync {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError>;
    fn update_trade(&self, trade: &Trade) -> Result<(), DomainError>;
    fn delete_trade(&self, id: &str) -> Result<(), DomainError>;
    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError>;
    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError>;
}
