//! Balance snapshots and the ledger
//!
//! The ledger holds one snapshot per day, oldest first. The last snapshot is
//! the current balance and the only row that is ever mutated.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::SpendingCategory;
use super::money::Money;

/// One day's account and savings totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    #[serde(rename = "Date", deserialize_with = "deserialize_ledger_date")]
    pub date: NaiveDate,

    #[serde(rename = "Account Balance")]
    pub account_balance: Money,

    #[serde(rename = "Savings Balance")]
    pub savings_balance: Money,
}

impl BalanceSnapshot {
    pub fn new(date: NaiveDate, account_balance: Money, savings_balance: Money) -> Self {
        Self {
            date,
            account_balance,
            savings_balance,
        }
    }

    /// This snapshot with a newly recorded expense applied
    ///
    /// The account is always debited. A `Savings` expense is also credited to
    /// savings, so the same amount leaves the account and lands in savings
    /// without any offsetting entry. `None` if either balance would overflow.
    pub fn after_expense(&self, category: SpendingCategory, amount: Money) -> Option<Self> {
        let account_balance = self.account_balance.checked_sub(amount)?;
        let savings_balance = if category.credits_savings() {
            self.savings_balance.checked_add(amount)?
        } else {
            self.savings_balance
        };

        Some(Self {
            date: self.date,
            account_balance,
            savings_balance,
        })
    }
}

/// Parse a ledger date cell
///
/// Older balance files stored full timestamps ("2024-03-01 10:31:12.123456");
/// only the calendar date is kept.
pub fn parse_ledger_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

fn deserialize_ledger_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_ledger_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ledger date '{}'", raw)))
}

/// Date-ordered sequence of balance snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    snapshots: Vec<BalanceSnapshot>,
}

impl Ledger {
    pub fn new(snapshots: Vec<BalanceSnapshot>) -> Self {
        Self { snapshots }
    }

    pub fn snapshots(&self) -> &[BalanceSnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<BalanceSnapshot> {
        self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent snapshot
    pub fn current(&self) -> Option<&BalanceSnapshot> {
        self.snapshots.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut BalanceSnapshot> {
        self.snapshots.last_mut()
    }

    /// Date range covered, oldest to newest
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.snapshots.first()?.date, self.snapshots.last()?.date))
    }

    /// Whether snapshots are sorted ascending by date
    pub fn is_date_ordered(&self) -> bool {
        self.snapshots.windows(2).all(|w| w[0].date <= w[1].date)
    }

    /// The last `n` snapshots, oldest first
    pub fn tail(&self, n: usize) -> &[BalanceSnapshot] {
        let start = self.snapshots.len().saturating_sub(n);
        &self.snapshots[start..]
    }
}
