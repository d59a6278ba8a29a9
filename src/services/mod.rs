//! Service layer for budget-tracker
//!
//! Business logic on top of the storage layer: input validation, the balance
//! update that follows each expense, the monthly category breakdown, and the
//! dashboard refresh shared by the CLI and the TUI.

pub mod balance;
pub mod breakdown;
pub mod dashboard;
pub mod expense;

pub use balance::BalanceService;
pub use breakdown::{CategoryBreakdown, CategoryTotal};
pub use dashboard::{DashboardService, DashboardState};
pub use expense::{parse_expense, ExpenseService};
