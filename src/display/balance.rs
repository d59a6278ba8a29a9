//! Balance formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::BalanceSnapshot;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Account Balance")]
    account: String,
    #[tabled(rename = "Savings Balance")]
    savings: String,
}

/// The two headline balances
pub fn format_balance_summary(current: &BalanceSnapshot, settings: &Settings) -> String {
    format!(
        "Current Account Balance: {}\nCurrent Savings Balance: {}\nAs of:                   {}\n",
        settings.format_money(current.account_balance),
        settings.format_money(current.savings_balance),
        settings.format_date(current.date),
    )
}

/// Ledger rows as a table, oldest first
pub fn format_balance_history(snapshots: &[BalanceSnapshot], settings: &Settings) -> String {
    if snapshots.is_empty() {
        return "No balance history.".to_string();
    }

    let rows = snapshots.iter().map(|s| BalanceRow {
        date: settings.format_date(s.date),
        account: settings.format_money(s.account_balance),
        savings: settings.format_money(s.savings_balance),
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
