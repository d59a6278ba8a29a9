//! Expense table formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Spending Category")]
    category: String,
    #[tabled(rename = "Amount Spent")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        year: e.year,
        date: settings.format_date(e.date),
        category: e.category.to_string(),
        amount: settings.format_money(e.amount),
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string()
}
