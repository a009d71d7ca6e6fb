use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

const TRADE_COLUMNS: &str = "id, trade_date, trade_time, asset, strategy, entry, stop_loss, take_profit, profit_loss, notes, owner_id, created_at, updated_at";

pub struct SqliteTradeRepo {
    conn: Mutex<Connection>,
}

impl SqliteTradeRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    // Decode failures surface as errors instead of dropping rows, so a
    // corrupt record can never silently skew the displayed totals.
    fn row_to_trade(row: &rusqlite::Row) -> Result<Trade, rusqlite::Error> {
        let date_str: String = row.get(1)?;
        let time_str: Option<String> = row.get(2)?;
        let strategy_str: String = row.get(4)?;
        let created_str: String = row.get(11)?;
        let updated_str: String = row.get(12)?;

        Ok(Trade {
            id: row.get(0)?,
            date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|e| decode_err(1, Box::new(e)))?,
            time: time_str
                .map(|s| {
                    NaiveTime::parse_from_str(&s, "%H:%M:%S")
                        .map_err(|e| decode_err(2, Box::new(e)))
                })
                .transpose()?,
            asset: row.get(3)?,
            strategy: strategy_str
                .parse()
                .map_err(|e: String| decode_err(4, e.into()))?,
            entry: row.get(5)?,
            stop_loss: row.get(6)?,
            take_profit: row.get(7)?,
            profit_loss: row.get(8)?,
            notes: row.get(9)?,
            owner_id: row.get(10)?,
            created_at: parse_utc(&created_str, 11)?,
            updated_at: parse_utc(&updated_str, 12)?,
        })
    }
}

fn decode_err(
    idx: usize,
    err: Box<dyn std::error::Error + Send + Sync + 'static>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, err)
}

fn parse_utc(s: &str, idx: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| decode_err(idx, Box::new(e)))
}

impl TradeRepository for SqliteTradeRepo {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO trades (id, trade_date, trade_time, asset, strategy, entry, stop_loss, take_profit, profit_loss, notes, owner_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                trade.id,
                trade.date.format("%Y-%m-%d").to_string(),
                trade.time.map(|t| t.format("%H:%M:%S").to_string()),
                trade.asset,
                trade.strategy.to_string(),
                trade.entry,
                trade.stop_loss,
                trade.take_profit,
                trade.profit_loss,
                trade.notes,
                trade.owner_id,
                trade.created_at.to_rfc3339(),
                trade.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add trade: {e}")))?;
        Ok(())
    }

    fn update_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute(
                "UPDATE trades SET trade_date = ?1, trade_time = ?2, asset = ?3, strategy = ?4, entry = ?5, stop_loss = ?6, take_profit = ?7, profit_loss = ?8, notes = ?9, updated_at = ?10 WHERE id = ?11",
                params![
                    trade.date.format("%Y-%m-%d").to_string(),
                    trade.time.map(|t| t.format("%H:%M:%S").to_string()),
                    trade.asset,
                    trade.strategy.to_string(),
                    trade.entry,
                    trade.stop_loss,
                    trade.take_profit,
                    trade.profit_loss,
                    trade.notes,
                    trade.updated_at.to_rfc3339(),
                    trade.id,
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to update trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!(
                "Trade not found: {}",
                trade.id
            )));
        }
        Ok(())
    }

    fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM trades WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        Ok(())
    }

    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {TRADE_COLUMNS} FROM trades WHERE id = ?1"
            ))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        match rows.next() {
            None => Ok(None),
            Some(row) => row
                .map(Some)
                .map_err(|e| DomainError::Database(format!("Failed to decode trade: {e}"))),
        }
    }

    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {TRADE_COLUMNS} FROM trades WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(owner) = &filter.owner_id {
            sql.push_str(&format!(" AND owner_id = ?{}", param_values.len() + 1));
            param_values.push(Box::new(owner.clone()));
        }
        if let Some(asset) = &filter.asset {
            sql.push_str(&format!(" AND asset LIKE ?{}", param_values.len() + 1));
            param_values.push(Box::new(format!("%{asset}%")));
        }
        sql.push_str(" ORDER BY trade_date DESC, created_at DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let trades = stmt
            .query_map(params_refs.as_slice(), Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<Trade>, _>>()
            .map_err(|e| DomainError::Database(format!("Failed to decode trade: {e}")))?;
        Ok(trades)
    }
}
