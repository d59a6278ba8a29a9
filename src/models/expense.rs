//! Expense record model
//!
//! One logged spending entry. Records carry no identifier; they are
//! addressed by position in the insertion-ordered expense log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::SpendingCategory;
use super::money::Money;

/// Earliest year accepted from the input form
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted from the input form
pub const MAX_YEAR: i32 = 2100;

/// A single expense, serialized with the expense file's column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Spending Category")]
    pub category: SpendingCategory,

    #[serde(rename = "Amount Spent")]
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(year: i32, date: NaiveDate, category: SpendingCategory, amount: Money) -> Self {
        Self {
            year,
            date,
            category,
            amount,
        }
    }

    /// Check the constraints the input form enforces
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ExpenseValidationError::YearOutOfRange(self.year));
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    YearOutOfRange(i32),
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange(year) => write!(
                f,
                "Year {} is outside the range {}-{}",
                year, MIN_YEAR, MAX_YEAR
            ),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount spent cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
