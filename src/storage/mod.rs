//! Storage layer for budget-tracker
//!
//! Two flat CSV files act as the database: the expense log and the balance
//! ledger. Each is wrapped in a repository that owns the in-memory copy and
//! writes the whole collection back through a `TableStore` after every
//! mutation.

pub mod balances;
pub mod expenses;
pub mod file_io;
pub mod sample;
pub mod table;

pub use balances::LedgerRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_csv, write_csv_atomic, CsvRecord};
pub use table::{CsvTable, MemoryTable, TableStore};

use chrono::{Local, NaiveDate};
use rand::Rng;

use crate::activity::{ActivityEntry, ActivityLogger};
use crate::config::paths::BudgetPaths;
use crate::config::settings::SampleSettings;
use crate::error::BudgetError;
use crate::models::{BalanceSnapshot, Expense};

/// How a collection came to be in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Read from the store, with this many rows
    Loaded(usize),
    /// Nothing was persisted; this many sample rows were generated and saved
    Generated(usize),
}

impl LoadOutcome {
    pub fn rows(&self) -> usize {
        match self {
            Self::Loaded(n) | Self::Generated(n) => *n,
        }
    }

    pub fn was_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Result of loading both collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub expenses: LoadOutcome,
    pub ledger: LoadOutcome,
}

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub ledger: LedgerRepository,
    activity: Option<ActivityLogger>,
}

impl Storage {
    /// Open CSV-backed storage under the configured data directory
    pub fn open(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(Box::new(CsvTable::<Expense>::new(
                paths.expenses_file(),
            ))),
            ledger: LedgerRepository::new(Box::new(CsvTable::<BalanceSnapshot>::new(
                paths.balances_file(),
            ))),
            activity: Some(ActivityLogger::new(paths.activity_log())),
        })
    }

    /// Storage over caller-supplied stores, with no activity log
    pub fn with_stores(
        expenses: Box<dyn TableStore<Expense>>,
        ledger: Box<dyn TableStore<BalanceSnapshot>>,
    ) -> Self {
        Self {
            expenses: ExpenseRepository::new(expenses),
            ledger: LedgerRepository::new(ledger),
            activity: None,
        }
    }

    /// Storage held entirely in memory, starting empty
    pub fn in_memory() -> Self {
        Self::with_stores(
            Box::new(MemoryTable::<Expense>::new()),
            Box::new(MemoryTable::<BalanceSnapshot>::new()),
        )
    }

    /// Attach an activity logger
    pub fn with_activity_log(mut self, logger: ActivityLogger) -> Self {
        self.activity = Some(logger);
        self
    }

    /// Load both collections, generating sample data for any that is missing
    pub fn load_all(&self, sample: &SampleSettings) -> Result<LoadReport, BudgetError> {
        let mut rng = rand::thread_rng();
        self.load_all_with(&mut rng, Local::now().date_naive(), sample)
    }

    /// Load both collections with an explicit random source and date
    pub fn load_all_with<R: Rng>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        sample: &SampleSettings,
    ) -> Result<LoadReport, BudgetError> {
        let expenses = self.expenses.load(rng, today, sample)?;
        if expenses.was_generated() {
            self.log_event(ActivityEntry::sample_generated(
                self.expenses.location(),
                expenses.rows(),
            ));
        }

        let ledger = self.ledger.load(rng, today, sample)?;
        if ledger.was_generated() {
            self.log_event(ActivityEntry::sample_generated(
                self.ledger.location(),
                ledger.rows(),
            ));
        }

        Ok(LoadReport { expenses, ledger })
    }

    /// Save both collections
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.expenses.save()?;
        self.ledger.save()?;
        Ok(())
    }

    /// Record an event in the activity log
    ///
    /// Failures are ignored: the data files are already written by the time
    /// anything is logged.
    pub fn log_event(&self, entry: ActivityEntry) {
        if let Some(logger) = &self.activity {
            let _ = logger.log(&entry);
        }
    }

    pub fn activity(&self) -> Option<&ActivityLogger> {
        self.activity.as_ref()
    }
}
