//! Expense CLI commands

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_balance_summary, format_expense_table};
use crate::error::BudgetResult;
use crate::services::{parse_expense, DashboardService, ExpenseService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Year column (defaults to the configured default year)
    #[arg(short, long)]
    pub year: Option<String>,
    /// Expense date, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Food, Transport, Housing, Entertainment, Savings or Other
    #[arg(short, long)]
    pub category: String,
    /// Amount spent (e.g. "42.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of most recent expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Show every expense
    #[arg(short, long, conflicts_with = "limit")]
    pub all: bool,
}

/// Handle `add`
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> BudgetResult<()> {
    let year = args
        .year
        .unwrap_or_else(|| settings.form_year().to_string());
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let expense = parse_expense(&year, &date, &args.category, &args.amount)?;
    let category = expense.category;

    let state = DashboardService::new(storage).submit(expense)?;

    println!("Expense for '{}' added successfully!", category);
    if let Some(current) = state.current_balance() {
        println!();
        print!("{}", format_balance_summary(current, settings));
    }

    Ok(())
}

/// Handle `list`
pub fn handle_list_command(storage: &Storage, settings: &Settings, args: ListArgs) -> BudgetResult<()> {
    let service = ExpenseService::new(storage);
    let limit = if args.all {
        None
    } else {
        Some(args.limit.unwrap_or(settings.max_display_rows))
    };

    let expenses = service.list(limit)?;
    println!("{}", format_expense_table(&expenses, settings));

    let total = service.count()?;
    if expenses.len() < total {
        println!("Showing {} of {} expenses (use --all to show everything)", expenses.len(), total);
    }

    Ok(())
}
