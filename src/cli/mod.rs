//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod activity;
pub mod balance;
pub mod breakdown;
pub mod config;
pub mod expense;

pub use activity::{handle_activity_command, ActivityArgs};
pub use balance::{handle_balances_command, BalancesArgs};
pub use breakdown::{handle_breakdown_command, BreakdownArgs};
pub use config::handle_config_command;
pub use expense::{handle_add_command, handle_list_command, AddArgs, ListArgs};
