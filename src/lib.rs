pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::trades::TradeUseCase;
use crate::application::weekly::{WeekGroup, WeeklyUseCase};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::trade_repo::SqliteTradeRepo;
use rusqlite::Connection;
use std::sync::Arc;

pub struct TradeDesk {
    trade_uc: TradeUseCase,
    weekly_uc: WeeklyUseCase,
}

impl TradeDesk {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;
        Ok(Self::with_repo(Arc::new(SqliteTradeRepo::new(conn))))
    }

    pub fn with_repo(repo: Arc<dyn TradeRepository>) -> Self {
        Self {
            trade_uc: TradeUseCase::new(repo.clone()),
            weekly_uc: WeeklyUseCase::new(repo),
        }
    }

    // Delegating methods
    pub fn trade_add(&self, owner_id: &str, draft: TradeDraft) -> Result<Trade, DomainError> {
        self.trade_uc.create(owner_id, draft)
    }

    pub fn trade_update(&self, id: &str, draft: TradeDraft) -> Result<Trade, DomainError> {
        self.trade_uc.update(id, draft)
    }

    pub fn trade_delete(&self, id: &str) -> Result<(), DomainError> {
        self.trade_uc.delete(id)
    }

    pub fn trade_get(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        self.trade_uc.get(id)
    }

    pub fn trade_list(&self, filter: TradeFilter) -> Result<Vec<Trade>, DomainError> {
        self.trade_uc.list(filter)
    }

    pub fn weekly_report(
        &self,
        owner_id: Option<&str>,
        filter_text: &str,
    ) -> Result<Vec<WeekGroup>, DomainError> {
        self.weekly_uc.report(owner_id, filter_text)
    }
}
