//! Expense service
//!
//! Parses form and command-line input into expenses and answers listing
//! queries against the expense log.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money, SpendingCategory};
use crate::storage::Storage;

/// Build an expense from raw text fields
///
/// Every field is checked before anything is returned, so a caller can
/// submit the result without touching storage on bad input.
pub fn parse_expense(year: &str, date: &str, category: &str, amount: &str) -> BudgetResult<Expense> {
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| BudgetError::Validation(format!("Year must be a whole number: '{}'", year.trim())))?;

    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!(
            "Date must be in YYYY-MM-DD format: '{}'",
            date.trim()
        ))
    })?;

    let category = category
        .parse::<SpendingCategory>()
        .map_err(|e| BudgetError::Validation(e.to_string()))?;

    let amount = Money::parse(amount).map_err(|e| BudgetError::Validation(e.to_string()))?;

    let expense = Expense::new(year, date, category, amount);
    expense
        .validate()
        .map_err(|e| BudgetError::Validation(e.to_string()))?;

    Ok(expense)
}

/// Service for reading the expense log
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Expenses for a listing: all of them, or the last `limit`
    pub fn list(&self, limit: Option<usize>) -> BudgetResult<Vec<Expense>> {
        match limit {
            Some(n) => self.storage.expenses.recent(n),
            None => self.storage.expenses.get_all(),
        }
    }

    pub fn count(&self) -> BudgetResult<usize> {
        self.storage.expenses.count()
    }
}
