//! Category breakdown CLI command

use clap::Args;

use crate::config::Settings;
use crate::display::format_breakdown;
use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthKey;
use crate::services::CategoryBreakdown;
use crate::storage::Storage;

/// Arguments for `breakdown`
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Month to break down, YYYY-MM (defaults to the current month)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle `breakdown`
pub fn handle_breakdown_command(
    storage: &Storage,
    settings: &Settings,
    args: BreakdownArgs,
) -> BudgetResult<()> {
    let month = match args.month {
        Some(text) => text
            .parse::<MonthKey>()
            .map_err(|e| BudgetError::Validation(e.to_string()))?,
        None => MonthKey::current(),
    };

    let expenses = storage.expenses.get_all()?;
    let breakdown = CategoryBreakdown::generate(&expenses, month);
    print!("{}", format_breakdown(&breakdown, settings));

    Ok(())
}
