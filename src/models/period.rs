//! Calendar month keys
//!
//! The category breakdown is scoped to one month, identified by its
//! "YYYY-MM" key. A date belongs to the month when its ISO rendering
//! starts with the key.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, rendered as "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` must be in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month according to the local system clock
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls within this month (prefix match on the ISO date)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.format("%Y-%m-%d")
            .to_string()
            .starts_with(&self.to_string())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthKeyParseError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

/// Error for a malformed "YYYY-MM" key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKeyParseError(pub String);

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}'. Use YYYY-MM", self.0)
    }
}

impl std::error::Error for MonthKeyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(MonthKey::new(2024, 3).unwrap().to_string(), "2024-03");
    }

    #[test]
    fn test_contains() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert!(key.contains(date(2024, 3, 1)));
        assert!(key.contains(date(2024, 3, 31)));
        assert!(!key.contains(date(2024, 4, 1)));
        assert!(!key.contains(date(2023, 3, 15)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-11".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 11).unwrap());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024-1".parse::<MonthKey>().is_err());
        assert!("March".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_of_and_current() {
        assert_eq!(MonthKey::of(date(2025, 12, 24)).to_string(), "2025-12");
        let today = Local::now().date_naive();
        assert!(MonthKey::current().contains(today));
    }
}
