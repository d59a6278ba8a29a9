//! Persistence interface for tabular collections
//!
//! Repositories never touch the filesystem directly; they are handed a
//! `TableStore` that reads and overwrites a whole collection. `CsvTable` is
//! the on-disk backend, `MemoryTable` stands in for it in tests.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_csv, write_csv_atomic, CsvRecord};

/// Load/save contract for a full collection of rows
pub trait TableStore<T>: Send + Sync {
    /// Read every persisted row, or `None` if nothing has been persisted yet
    fn read(&self) -> BudgetResult<Option<Vec<T>>>;

    /// Overwrite the persisted collection with `rows`
    fn write(&self, rows: &[T]) -> BudgetResult<()>;

    /// Where the rows live, for messages and the activity log
    fn location(&self) -> String;
}

/// A collection persisted as one CSV file
pub struct CsvTable<T> {
    path: PathBuf,
    _rows: PhantomData<fn() -> T>,
}

impl<T> CsvTable<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _rows: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> TableStore<T> for CsvTable<T>
where
    T: Serialize + DeserializeOwned + CsvRecord,
{
    fn read(&self) -> BudgetResult<Option<Vec<T>>> {
        read_csv(&self.path)
    }

    fn write(&self, rows: &[T]) -> BudgetResult<()> {
        write_csv_atomic(&self.path, rows)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// A collection held in memory
pub struct MemoryTable<T> {
    rows: RwLock<Option<Vec<T>>>,
}

impl<T> MemoryTable<T> {
    /// An empty store with nothing persisted
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(None),
        }
    }

    /// A store that already holds `rows`
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(Some(rows)),
        }
    }
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TableStore<T> for MemoryTable<T>
where
    T: Clone + Send + Sync,
{
    fn read(&self) -> BudgetResult<Option<Vec<T>>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rows.clone())
    }

    fn write(&self, rows: &[T]) -> BudgetResult<()> {
        let mut stored = self
            .rows
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *stored = Some(rows.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Shared handle so a test can keep inspecting a store it handed away
impl<T, S> TableStore<T> for std::sync::Arc<S>
where
    S: TableStore<T> + ?Sized,
{
    fn read(&self) -> BudgetResult<Option<Vec<T>>> {
        (**self).read()
    }

    fn write(&self, rows: &[T]) -> BudgetResult<()> {
        (**self).write(rows)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
