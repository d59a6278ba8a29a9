//! Activity entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{BalanceSnapshot, Expense};

/// Kinds of events written to the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A missing data file was filled with sample rows
    SampleGenerated,
    /// An expense was appended to the log
    ExpenseAdded,
    /// The latest balance snapshot was adjusted
    BalanceUpdated,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::SampleGenerated => write!(f, "SAMPLE"),
            ActivityKind::ExpenseAdded => write!(f, "EXPENSE"),
            ActivityKind::BalanceUpdated => write!(f, "BALANCE"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: ActivityKind,

    /// Event-specific payload
    #[serde(default)]
    pub details: serde_json::Value,
}

impl ActivityEntry {
    fn now(event: ActivityKind, details: serde_json::Value) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            details,
        }
    }

    /// Sample rows were written to `location`
    pub fn sample_generated(location: impl Into<String>, rows: usize) -> Self {
        Self::now(
            ActivityKind::SampleGenerated,
            json!({ "location": location.into(), "rows": rows }),
        )
    }

    /// `expense` was appended to the expense log
    pub fn expense_added(expense: &Expense) -> Self {
        Self::now(
            ActivityKind::ExpenseAdded,
            serde_json::to_value(expense).unwrap_or_default(),
        )
    }

    /// The latest snapshot went from `before` to `after`
    pub fn balance_updated(before: &BalanceSnapshot, after: &BalanceSnapshot) -> Self {
        Self::now(
            ActivityKind::BalanceUpdated,
            json!({
                "date": after.date.to_string(),
                "account": [before.account_balance.to_string(), after.account_balance.to_string()],
                "savings": [before.savings_balance.to_string(), after.savings_balance.to_string()],
            }),
        )
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.details
        )
    }
}
