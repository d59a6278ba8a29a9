//! Balance ledger repository
//!
//! Manages the daily balance snapshots (balances_data.csv)

use std::sync::RwLock;

use chrono::NaiveDate;
use rand::Rng;

use crate::config::SampleSettings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BalanceSnapshot, Ledger};

use super::file_io::CsvRecord;
use super::sample::generate_ledger;
use super::table::TableStore;
use super::LoadOutcome;

impl CsvRecord for BalanceSnapshot {
    const HEADERS: &'static [&'static str] = &["Date", "Account Balance", "Savings Balance"];
}

/// Repository for the balance ledger
pub struct LedgerRepository {
    store: Box<dyn TableStore<BalanceSnapshot>>,
    data: RwLock<Ledger>,
}

impl LedgerRepository {
    /// Create a new ledger repository backed by `store`
    pub fn new(store: Box<dyn TableStore<BalanceSnapshot>>) -> Self {
        Self {
            store,
            data: RwLock::new(Ledger::default()),
        }
    }

    /// Where the ledger is persisted
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Load the ledger from the store, generating and saving a sample
    /// history if nothing has been persisted yet
    pub fn load<R: Rng>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        sample: &SampleSettings,
    ) -> BudgetResult<LoadOutcome> {
        let (ledger, outcome) = match self.store.read()? {
            Some(rows) => {
                let count = rows.len();
                (Ledger::new(rows), LoadOutcome::Loaded(count))
            }
            None => {
                let ledger = generate_ledger(rng, today, sample);
                self.store.write(ledger.snapshots())?;
                let count = ledger.len();
                (ledger, LoadOutcome::Generated(count))
            }
        };

        *self.write_lock()? = ledger;
        Ok(outcome)
    }

    /// Overwrite the store with the full ledger
    pub fn save(&self) -> BudgetResult<()> {
        let data = self.read_lock()?;
        self.store.write(data.snapshots())
    }

    /// Replace the in-memory ledger and persist it
    pub fn replace(&self, ledger: Ledger) -> BudgetResult<()> {
        *self.write_lock()? = ledger;
        self.save()
    }

    /// A copy of the full ledger
    pub fn get_all(&self) -> BudgetResult<Ledger> {
        Ok(self.read_lock()?.clone())
    }

    /// The most recent snapshot
    pub fn current(&self) -> BudgetResult<Option<BalanceSnapshot>> {
        Ok(self.read_lock()?.current().cloned())
    }

    /// Count snapshots
    pub fn count(&self) -> BudgetResult<usize> {
        Ok(self.read_lock()?.len())
    }

    fn read_lock(&self) -> BudgetResult<std::sync::RwLockReadGuard<'_, Ledger>> {
        self.data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> BudgetResult<std::sync::RwLockWriteGuard<'_, Ledger>> {
        self.data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
