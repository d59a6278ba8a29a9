//! Expense repository
//!
//! Manages the insertion-ordered expense log (budget_data.csv)

use std::sync::RwLock;

use chrono::NaiveDate;
use rand::Rng;

use crate::config::SampleSettings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Expense;

use super::file_io::CsvRecord;
use super::sample::generate_expenses;
use super::table::TableStore;
use super::LoadOutcome;

impl CsvRecord for Expense {
    const HEADERS: &'static [&'static str] =
        &["Year", "Date", "Spending Category", "Amount Spent"];
}

/// Repository for the expense log
pub struct ExpenseRepository {
    store: Box<dyn TableStore<Expense>>,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by `store`
    pub fn new(store: Box<dyn TableStore<Expense>>) -> Self {
        Self {
            store,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Where the expense log is persisted
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Load expenses from the store
    ///
    /// If nothing has been persisted yet, a sample history is generated
    /// and saved so later loads see the same rows.
    pub fn load<R: Rng>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        sample: &SampleSettings,
    ) -> BudgetResult<LoadOutcome> {
        let (rows, outcome) = match self.store.read()? {
            Some(rows) => {
                let count = rows.len();
                (rows, LoadOutcome::Loaded(count))
            }
            None => {
                let rows = generate_expenses(rng, today, sample);
                self.store.write(&rows)?;
                let count = rows.len();
                (rows, LoadOutcome::Generated(count))
            }
        };

        *self.write_lock()? = rows;
        Ok(outcome)
    }

    /// Overwrite the store with the full in-memory collection
    pub fn save(&self) -> BudgetResult<()> {
        let data = self.read_lock()?;
        self.store.write(&data)
    }

    /// Append one expense and persist the whole log
    pub fn append(&self, expense: Expense) -> BudgetResult<()> {
        {
            let mut data = self.write_lock()?;
            data.push(expense);
        }
        self.save()
    }

    /// Replace the in-memory collection and persist it
    pub fn replace(&self, expenses: Vec<Expense>) -> BudgetResult<()> {
        *self.write_lock()? = expenses;
        self.save()
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> BudgetResult<Vec<Expense>> {
        Ok(self.read_lock()?.clone())
    }

    /// The last `n` expenses in insertion order
    pub fn recent(&self, n: usize) -> BudgetResult<Vec<Expense>> {
        let data = self.read_lock()?;
        let start = data.len().saturating_sub(n);
        Ok(data[start..].to_vec())
    }

    /// Count expenses
    pub fn count(&self) -> BudgetResult<usize> {
        Ok(self.read_lock()?.len())
    }

    fn read_lock(&self) -> BudgetResult<std::sync::RwLockReadGuard<'_, Vec<Expense>>> {
        self.data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> BudgetResult<std::sync::RwLockWriteGuard<'_, Vec<Expense>>> {
        self.data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
