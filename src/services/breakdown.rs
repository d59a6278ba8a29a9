//! Monthly spending by category
//!
//! Groups one month's expenses by category for the breakdown chart and the
//! `breakdown` command.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, MonthKey, SpendingCategory};

/// Spending in one category for the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: SpendingCategory,
    /// Sum of amounts
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of the month's total, 0-100
    pub percentage: f64,
}

/// A month's expenses grouped by category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub month: MonthKey,
    /// Categories with at least one expense, ordered by name
    pub entries: Vec<CategoryTotal>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Aggregate the expenses dated within `month`
    pub fn generate(expenses: &[Expense], month: MonthKey) -> Self {
        let mut by_name: BTreeMap<&'static str, (SpendingCategory, Money, usize)> =
            BTreeMap::new();

        for expense in expenses.iter().filter(|e| month.contains(e.date)) {
            let entry = by_name
                .entry(expense.category.name())
                .or_insert((expense.category, Money::zero(), 0));
            entry.1 = entry.1.saturating_add(expense.amount);
            entry.2 += 1;
        }

        // Loaded rows are not range-checked; sums clamp at the i64 limit
        let total = by_name
            .values()
            .fold(Money::zero(), |acc, (_, amount, _)| acc.saturating_add(*amount));

        let entries = by_name
            .into_values()
            .map(|(category, amount, count)| CategoryTotal {
                category,
                total: amount,
                count,
                percentage: share(amount, total),
            })
            .collect();

        Self {
            month,
            entries,
            total,
        }
    }

    /// Aggregate the current month's expenses
    pub fn current(expenses: &[Expense]) -> Self {
        Self::generate(expenses, MonthKey::current())
    }

    /// Chart title, e.g. "Spending by Category for 2024-03"
    pub fn title(&self) -> String {
        format!("Spending by Category for {}", self.month)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of expenses in the month
    pub fn expense_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn get(&self, category: SpendingCategory) -> Option<&CategoryTotal> {
        self.entries.iter().find(|e| e.category == category)
    }
}

fn share(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        amount.cents() as f64 / total.cents() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(y: i32, m: u32, d: u32, category: SpendingCategory, cents: i64) -> Expense {
        Expense::new(
            y,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
            Money::from_cents(cents),
        )
    }

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn test_groups_and_orders_by_name() {
        let expenses = vec![
            expense(2024, 3, 1, SpendingCategory::Transport, 1_000),
            expense(2024, 3, 2, SpendingCategory::Food, 2_000),
            expense(2024, 3, 3, SpendingCategory::Transport, 500),
            expense(2024, 3, 31, SpendingCategory::Entertainment, 1_500),
        ];
        let breakdown = CategoryBreakdown::generate(&expenses, march());

        let names: Vec<_> = breakdown.entries.iter().map(|e| e.category.name()).collect();
        assert_eq!(names, vec!["Entertainment", "Food", "Transport"]);

        let transport = breakdown.get(SpendingCategory::Transport).unwrap();
        assert_eq!(transport.total.cents(), 1_500);
        assert_eq!(transport.count, 2);
        assert_eq!(breakdown.total.cents(), 5_000);
        assert_eq!(breakdown.expense_count(), 4);
    }

    #[test]
    fn test_only_the_requested_month() {
        let expenses = vec![
            expense(2024, 2, 29, SpendingCategory::Food, 1_000),
            expense(2024, 3, 15, SpendingCategory::Food, 700),
            expense(2024, 4, 1, SpendingCategory::Housing, 90_000),
            expense(2023, 3, 15, SpendingCategory::Food, 300),
        ];
        let breakdown = CategoryBreakdown::generate(&expenses, march());

        assert_eq!(breakdown.entries.len(), 1);
        assert_eq!(breakdown.total.cents(), 700);
        assert!(breakdown.get(SpendingCategory::Housing).is_none());
    }

    #[test]
    fn test_month_filter_uses_date_not_year_column() {
        // The Year column is independent of Date and is ignored here
        let mut record = expense(2024, 3, 10, SpendingCategory::Other, 250);
        record.year = 1999;
        let breakdown = CategoryBreakdown::generate(&[record], march());

        assert_eq!(breakdown.total.cents(), 250);
    }

    #[test]
    fn test_totals_sum_to_month_total() {
        let expenses: Vec<_> = (1..=28)
            .map(|d| {
                let category = SpendingCategory::ALL[d as usize % SpendingCategory::ALL.len()];
                expense(2024, 3, d, category, i64::from(d) * 137)
            })
            .chain(std::iter::once(expense(2024, 2, 1, SpendingCategory::Food, 99)))
            .collect();
        let breakdown = CategoryBreakdown::generate(&expenses, march());

        let raw: Money = expenses
            .iter()
            .filter(|e| march().contains(e.date))
            .map(|e| e.amount)
            .sum();
        let grouped: Money = breakdown.entries.iter().map(|e| e.total).sum();
        assert_eq!(grouped, raw);
        assert_eq!(breakdown.total, raw);

        let pct: f64 = breakdown.entries.iter().map(|e| e.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_amounts_clamp_instead_of_overflowing() {
        let expenses = vec![
            expense(2024, 3, 1, SpendingCategory::Food, i64::MAX - 5),
            expense(2024, 3, 2, SpendingCategory::Food, 100),
            expense(2024, 3, 3, SpendingCategory::Other, i64::MAX),
        ];

        let breakdown = CategoryBreakdown::generate(&expenses, march());

        assert_eq!(breakdown.get(SpendingCategory::Food).unwrap().total.cents(), i64::MAX);
        assert_eq!(breakdown.get(SpendingCategory::Food).unwrap().count, 2);
        assert_eq!(breakdown.total.cents(), i64::MAX);
    }

    #[test]
    fn test_percentages() {
        let expenses = vec![
            expense(2024, 3, 1, SpendingCategory::Food, 7_500),
            expense(2024, 3, 1, SpendingCategory::Housing, 2_500),
        ];
        let breakdown = CategoryBreakdown::generate(&expenses, march());

        assert!((breakdown.get(SpendingCategory::Food).unwrap().percentage - 75.0).abs() < 1e-9);
        assert!((breakdown.get(SpendingCategory::Housing).unwrap().percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_month() {
        let breakdown = CategoryBreakdown::generate(&[], march());

        assert!(breakdown.is_empty());
        assert!(breakdown.total.is_zero());
        assert_eq!(breakdown.title(), "Spending by Category for 2024-03");
    }

    #[test]
    fn test_zero_amounts_have_zero_share() {
        let expenses = vec![expense(2024, 3, 1, SpendingCategory::Food, 0)];
        let breakdown = CategoryBreakdown::generate(&expenses, march());

        assert_eq!(breakdown.entries.len(), 1);
        assert_eq!(breakdown.entries[0].percentage, 0.0);
    }
}
