//! Spending categories
//!
//! A fixed set of six categories. Every expense belongs to exactly one;
//! `Savings` additionally moves the amount into the savings balance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum SpendingCategory {
    #[default]
    Food,
    Transport,
    Housing,
    Entertainment,
    Savings,
    Other,
}

impl SpendingCategory {
    /// All categories, in form order
    pub const ALL: [SpendingCategory; 6] = [
        Self::Food,
        Self::Transport,
        Self::Housing,
        Self::Entertainment,
        Self::Savings,
        Self::Other,
    ];

    /// Categories drawn from when synthesizing sample expenses
    pub const SAMPLE: [SpendingCategory; 5] = [
        Self::Food,
        Self::Transport,
        Self::Housing,
        Self::Entertainment,
        Self::Other,
    ];

    /// Display name, as persisted in the expense file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Savings => "Savings",
            Self::Other => "Other",
        }
    }

    /// Whether recording this category also credits the savings balance
    pub fn credits_savings(&self) -> bool {
        matches!(self, Self::Savings)
    }

    /// The next category in form order (wrapping)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous category in form order (wrapping)
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SpendingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpendingCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryParseError(trimmed.to_string()))
    }
}

/// Error for an unknown category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = SpendingCategory::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown spending category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
