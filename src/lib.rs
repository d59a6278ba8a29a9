//! budget-tracker - Terminal dashboard for personal spending
//!
//! Records expenses against a small set of spending categories and keeps a
//! daily ledger of account and savings balances. Both live in flat CSV
//! files; when either file is missing, a plausible sample history is
//! generated so the dashboard has something to show.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, balance snapshots, money and categories
//! - `storage`: CSV-backed repositories and sample data generation
//! - `activity`: JSONL activity log
//! - `services`: Expense submission, balance updates and the category breakdown
//! - `display`: Text tables for the CLI
//! - `cli`: Command handlers
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
//! use budget_tracker::storage::Storage;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//! storage.load_all(&settings.sample)?;
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
