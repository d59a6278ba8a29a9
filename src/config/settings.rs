//! User settings for budget-tracker
//!
//! Display preferences and the parameters used when bootstrapping an empty
//! data directory with sample data.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::Money;

/// User settings for budget-tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying balances
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of expense rows shown by default in listings
    #[serde(default = "default_max_display_rows")]
    pub max_display_rows: usize,

    /// Year pre-filled in the expense form (current year when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_year: Option<i32>,

    /// Sample generation parameters
    #[serde(default)]
    pub sample: SampleSettings,
}

/// Parameters for synthesizing data when nothing is persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSettings {
    /// Number of sample expense records
    #[serde(default = "default_sample_size")]
    pub expense_count: usize,

    /// Days of history before today
    #[serde(default = "default_history_days")]
    pub history_days: i64,

    /// Opening account and savings balance
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Money,
}

impl SampleSettings {
    /// Longest history window that will be synthesized
    pub const MAX_HISTORY_DAYS: i64 = 36_500;
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            expense_count: default_sample_size(),
            history_days: default_history_days(),
            starting_balance: default_starting_balance(),
        }
    }
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "£".to_string()
}

const ISO_DATE: &str = "%Y-%m-%d";

fn default_date_format() -> String {
    ISO_DATE.to_string()
}

fn default_max_display_rows() -> usize {
    10
}

fn default_sample_size() -> usize {
    100
}

fn default_history_days() -> i64 {
    180
}

fn default_starting_balance() -> Money {
    Money::from_dollars_cents(1000, 0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            max_display_rows: default_max_display_rows(),
            default_year: None,
            sample: SampleSettings::default(),
        }
    }
}

impl Settings {
    /// Year to pre-fill in the expense form
    pub fn form_year(&self) -> i32 {
        self.default_year.unwrap_or_else(|| Local::now().year())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured format, falling back to ISO 8601
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.format(ISO_DATE).to_string(),
        }
    }

    /// Check values that serde accepts but the rest of the program cannot use
    pub fn validate(&self) -> Result<(), BudgetError> {
        validate_date_format(&self.date_format)?;

        let days = self.sample.history_days;
        if !(0..=SampleSettings::MAX_HISTORY_DAYS).contains(&days) {
            return Err(BudgetError::Config(format!(
                "sample.history_days must be between 0 and {}, got {}",
                SampleSettings::MAX_HISTORY_DAYS,
                days
            )));
        }

        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Reject strftime strings chrono cannot render for a calendar date
fn validate_date_format(format: &str) -> Result<(), BudgetError> {
    let invalid = || BudgetError::Config(format!("Invalid date_format: {:?}", format));

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // Time and zone specifiers parse but fail when given only a date
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(format)).map_err(|_| invalid())
}
