use crate::domain::error::DomainError;
use crate::domain::values::outcome::Outcome;
use crate::domain::values::strategy_tag::StrategyTag;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub asset: String,
    pub strategy: StrategyTag,
    pub entry: String,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub profit_loss: f64,
    pub notes: Option<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submission payload for creating or editing a trade. Field checks run
/// once, at construction; a `Trade` never holds values that failed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDraft {
    pub date: NaiveDate,
    pub time: Option<String>,
    pub asset: String,
    pub strategy: StrategyTag,
    pub entry: String,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub profit_loss: f64,
    pub notes: Option<String>,
}

impl TradeDraft {
    fn validate(&self) -> Result<Option<NaiveTime>, DomainError> {
        if self.asset.trim().is_empty() {
            return Err(DomainError::InvalidInput("asset is required".into()));
        }
        if self.entry.trim().is_empty() {
            return Err(DomainError::InvalidInput("entry is required".into()));
        }
        for (name, value) in [("stop_loss", self.stop_loss), ("take_profit", self.take_profit)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(DomainError::InvalidInput(format!(
                        "{name} must be a non-negative price"
                    )));
                }
            }
        }
        if !self.profit_loss.is_finite() {
            return Err(DomainError::InvalidInput(
                "profit_loss must be a finite number".into(),
            ));
        }
        match self.time.as_deref() {
            None => Ok(None),
            Some("") => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map(Some)
                .map_err(|_| DomainError::InvalidInput(format!("Invalid time: {s}. Use HH:MM"))),
        }
    }
}

impl Trade {
    pub fn create(owner_id: String, draft: TradeDraft) -> Result<Self, DomainError> {
        let time = draft.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: draft.date,
            time,
            asset: draft.asset,
            strategy: draft.strategy,
            entry: draft.entry,
            stop_loss: draft.stop_loss,
            take_profit: draft.take_profit,
            profit_loss: draft.profit_loss,
            notes: draft.notes,
            owner_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields, keeping id, owner and `created_at`.
    pub fn revise(&mut self, draft: TradeDraft) -> Result<(), DomainError> {
        let time = draft.validate()?;
        self.date = draft.date;
        self.time = time;
        self.asset = draft.asset;
        self.strategy = draft.strategy;
        self.entry = draft.entry;
        self.stop_loss = draft.stop_loss;
        self.take_profit = draft.take_profit;
        self.profit_loss = draft.profit_loss;
        self.notes = draft.notes;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit_loss)
    }
}
