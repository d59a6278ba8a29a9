//! Dashboard service
//!
//! The single command both front ends call when an expense is entered:
//! validate, append, update the balance, then hand back everything the
//! dashboard draws.

use crate::activity::ActivityEntry;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BalanceSnapshot, Expense, Ledger, MonthKey};
use crate::storage::Storage;

use super::balance::BalanceService;
use super::breakdown::CategoryBreakdown;

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// The full expense log in insertion order
    pub expenses: Vec<Expense>,
    pub ledger: Ledger,
    /// Breakdown for the month the state was built for
    pub breakdown: CategoryBreakdown,
}

impl DashboardState {
    /// The latest balances, if the ledger has any
    pub fn current_balance(&self) -> Option<&BalanceSnapshot> {
        self.ledger.current()
    }
}

/// Service tying the expense log, the ledger and the breakdown together
pub struct DashboardService<'a> {
    storage: &'a Storage,
}

impl<'a> DashboardService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Snapshot of the dashboard for the current month
    pub fn state(&self) -> BudgetResult<DashboardState> {
        self.state_for(MonthKey::current())
    }

    /// Snapshot of the dashboard with the breakdown for `month`
    pub fn state_for(&self, month: MonthKey) -> BudgetResult<DashboardState> {
        let expenses = self.storage.expenses.get_all()?;
        let ledger = self.storage.ledger.get_all()?;
        let breakdown = CategoryBreakdown::generate(&expenses, month);

        Ok(DashboardState {
            expenses,
            ledger,
            breakdown,
        })
    }

    /// Record an expense and return the refreshed dashboard
    pub fn submit(&self, expense: Expense) -> BudgetResult<DashboardState> {
        self.submit_for(expense, MonthKey::current())
    }

    /// Record an expense and return the dashboard with the breakdown for `month`
    ///
    /// Nothing is written if the expense is invalid, the ledger is empty, or
    /// the amount would overflow the current balances. After that the
    /// expense log and the ledger are saved one after the other; a failure in
    /// between leaves the expense recorded without its balance update.
    pub fn submit_for(&self, expense: Expense, month: MonthKey) -> BudgetResult<DashboardState> {
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let (category, amount) = (expense.category, expense.amount);
        let balances = BalanceService::new(self.storage);
        balances.check_expense(category, amount)?;

        let entry = ActivityEntry::expense_added(&expense);
        self.storage.expenses.append(expense)?;
        self.storage.log_event(entry);

        balances.apply_expense(category, amount)?;

        self.state_for(month)
    }
}
