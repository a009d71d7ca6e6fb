use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS trades (
            id TEXT PRIMARY KEY,
            trade_date TEXT NOT NULL,
            trade_time TEXT,
            asset TEXT NOT NULL,
            strategy TEXT NOT NULL,
            entry TEXT NOT NULL,
            stop_loss REAL,
            take_profit REAL,
            profit_loss REAL NOT NULL,
            notes TEXT,
            owner_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trades_date ON trades(trade_date);
        CREATE INDEX IF NOT EXISTS idx_trades_asset ON trades(asset);
        CREATE INDEX IF NOT EXISTS idx_trades_owner ON trades(owner_id);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
