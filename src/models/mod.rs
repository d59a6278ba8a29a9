//! Core data models for budget-tracker
//!
//! This module contains the data structures of the budgeting domain:
//! money amounts, spending categories, expense records, balance snapshots
//! and month keys.

pub mod balance;
pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use balance::{BalanceSnapshot, Ledger};
pub use category::SpendingCategory;
pub use expense::{Expense, ExpenseValidationError};
pub use money::Money;
pub use period::MonthKey;
