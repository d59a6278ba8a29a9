//! Sample data for a fresh data directory
//!
//! When either file is missing on first run, a plausible history is
//! synthesized so the dashboard has something to show.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

use crate::config::SampleSettings;
use crate::models::{BalanceSnapshot, Expense, Ledger, Money, SpendingCategory};

/// First day of the history window and its length in days
///
/// The configured length is clamped, and the start stops at the earliest
/// representable date.
fn history_window(today: NaiveDate, sample: &SampleSettings) -> (NaiveDate, i64) {
    let days = sample.history_days.clamp(0, SampleSettings::MAX_HISTORY_DAYS);
    let start = today
        .checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN);
    (start, (today - start).num_days())
}

/// Generate random expenses dated within the trailing history window
///
/// Each record gets a date between `today - history_days` and `today`, a
/// year drawn independently from the years the window spans, a category
/// other than `Savings`, and an amount between 5.00 and 500.00.
pub fn generate_expenses<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    sample: &SampleSettings,
) -> Vec<Expense> {
    let (start, days) = history_window(today, sample);

    (0..sample.expense_count)
        .map(|_| {
            let year = rng.gen_range(start.year()..=today.year());
            let date = start + Duration::days(rng.gen_range(0..=days));
            let category =
                SpendingCategory::SAMPLE[rng.gen_range(0..SpendingCategory::SAMPLE.len())];
            let amount = Money::from_f64(rng.gen_range(5.0..=500.0));
            Expense::new(year, date, category, amount)
        })
        .collect()
}

/// Generate one snapshot per day from `today - history_days` to `today`
///
/// Random walk from the starting balance: each day the account drops by up
/// to 50.00, and on a coin flip savings grows by up to 20.00.
pub fn generate_ledger<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    sample: &SampleSettings,
) -> Ledger {
    let (start, days) = history_window(today, sample);
    let mut account = sample.starting_balance;
    let mut savings = sample.starting_balance;

    let snapshots = (0..=days)
        .map(|offset| {
            account = account.saturating_sub(Money::from_f64(rng.gen_range(0.0..=50.0)));
            if rng.gen_bool(0.5) {
                savings = savings.saturating_add(Money::from_f64(rng.gen_range(0.0..=20.0)));
            }
            BalanceSnapshot::new(start + Duration::days(offset), account, savings)
        })
        .collect();

    Ledger::new(snapshots)
}
