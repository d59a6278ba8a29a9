//! Balance service
//!
//! Applies a newly recorded expense to the most recent ledger snapshot.

use crate::activity::ActivityEntry;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BalanceSnapshot, Ledger, Money, SpendingCategory};
use crate::storage::Storage;

fn balance_overflow(amount: Money) -> BudgetError {
    BudgetError::Validation(format!(
        "Amount spent is too large for the current balance: {}",
        amount
    ))
}

/// Service for the balance ledger
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Debit `amount` from the latest snapshot and persist the ledger
    ///
    /// Only the last snapshot changes. A `Savings` expense is also credited
    /// to the savings balance. Negative amounts are not rejected here;
    /// validation belongs to whoever built the expense. An amount that would
    /// overflow either balance is a `Validation` error and nothing is saved.
    pub fn apply_expense(&self, category: SpendingCategory, amount: Money) -> BudgetResult<Ledger> {
        let mut ledger = self.storage.ledger.get_all()?;
        let current = ledger.current_mut().ok_or(BudgetError::EmptyLedger)?;

        let after = current
            .after_expense(category, amount)
            .ok_or_else(|| balance_overflow(amount))?;
        let before = std::mem::replace(current, after.clone());

        self.storage.ledger.replace(ledger.clone())?;
        self.storage
            .log_event(ActivityEntry::balance_updated(&before, &after));

        Ok(ledger)
    }

    /// Check that `apply_expense` would succeed, without changing anything
    pub fn check_expense(&self, category: SpendingCategory, amount: Money) -> BudgetResult<()> {
        self.current()?
            .after_expense(category, amount)
            .map(|_| ())
            .ok_or_else(|| balance_overflow(amount))
    }

    /// The most recent snapshot
    pub fn current(&self) -> BudgetResult<BalanceSnapshot> {
        self.storage
            .ledger
            .current()?
            .ok_or(BudgetError::EmptyLedger)
    }

    /// The last `days` snapshots, oldest first
    pub fn history(&self, days: usize) -> BudgetResult<Vec<BalanceSnapshot>> {
        Ok(self.storage.ledger.get_all()?.tail(days).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::storage::MemoryTable;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn storage_with(snapshots: Vec<BalanceSnapshot>) -> Storage {
        let storage = Storage::with_stores(
            Box::new(MemoryTable::<Expense>::with_rows(Vec::new())),
            Box::new(MemoryTable::with_rows(snapshots)),
        );
        storage
            .load_all(&crate::config::SampleSettings::default())
            .unwrap();
        storage
    }

    fn two_days() -> Vec<BalanceSnapshot> {
        vec![
            BalanceSnapshot::new(date(1), Money::from_cents(95_000), Money::from_cents(50_000)),
            BalanceSnapshot::new(date(2), Money::from_cents(90_000), Money::from_cents(50_000)),
        ]
    }

    #[test]
    fn test_food_expense_debits_account_only() {
        let storage = storage_with(two_days());
        let service = BalanceService::new(&storage);

        let ledger = service
            .apply_expense(SpendingCategory::Food, Money::from_cents(4250))
            .unwrap();

        let current = ledger.current().unwrap();
        assert_eq!(current.account_balance.cents(), 85_750);
        assert_eq!(current.savings_balance.cents(), 50_000);
        assert_eq!(ledger.snapshots()[0], two_days()[0]);
        assert_eq!(storage.ledger.get_all().unwrap(), ledger);
    }

    #[test]
    fn test_savings_expense_moves_money_to_savings() {
        let storage = storage_with(two_days());
        let service = BalanceService::new(&storage);

        let ledger = service
            .apply_expense(SpendingCategory::Savings, Money::from_cents(10_000))
            .unwrap();

        let current = ledger.current().unwrap();
        assert_eq!(current.account_balance.cents(), 80_000);
        assert_eq!(current.savings_balance.cents(), 60_000);
    }

    #[test]
    fn test_every_category_debits_account() {
        for category in SpendingCategory::ALL {
            let storage = storage_with(two_days());
            let ledger = BalanceService::new(&storage)
                .apply_expense(category, Money::from_cents(1_234))
                .unwrap();

            let current = ledger.current().unwrap();
            assert_eq!(current.account_balance.cents(), 90_000 - 1_234);
            let expected_savings = if category == SpendingCategory::Savings {
                50_000 + 1_234
            } else {
                50_000
            };
            assert_eq!(current.savings_balance.cents(), expected_savings);
        }
    }

    #[test]
    fn test_empty_ledger_is_an_error() {
        let storage = storage_with(Vec::new());
        let result =
            BalanceService::new(&storage).apply_expense(SpendingCategory::Food, Money::from_cents(1));

        assert!(matches!(result, Err(BudgetError::EmptyLedger)));
        assert!(matches!(
            BalanceService::new(&storage).current(),
            Err(BudgetError::EmptyLedger)
        ));
    }

    #[test]
    fn test_overflowing_amount_leaves_ledger_untouched() {
        let storage = storage_with(two_days());
        let service = BalanceService::new(&storage);
        let huge = Money::from_cents(i64::MAX);

        service.apply_expense(SpendingCategory::Food, huge).unwrap();
        let ledger = storage.ledger.get_all().unwrap();

        assert!(service
            .check_expense(SpendingCategory::Food, huge)
            .unwrap_err()
            .is_validation());
        assert!(service
            .apply_expense(SpendingCategory::Food, huge)
            .unwrap_err()
            .is_validation());
        assert_eq!(storage.ledger.get_all().unwrap(), ledger);
    }

    #[test]
    fn test_check_expense_on_empty_ledger() {
        let storage = storage_with(Vec::new());
        let result =
            BalanceService::new(&storage).check_expense(SpendingCategory::Food, Money::from_cents(1));
        assert!(matches!(result, Err(BudgetError::EmptyLedger)));
    }

    #[test]
    fn test_history() {
        let storage = storage_with(two_days());
        let service = BalanceService::new(&storage);

        assert_eq!(service.history(1).unwrap(), vec![two_days()[1].clone()]);
        assert_eq!(service.history(30).unwrap().len(), 2);
    }
}
