//! Balance CLI command

use clap::Args;

use crate::config::Settings;
use crate::display::{format_balance_history, format_balance_summary};
use crate::error::BudgetResult;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Arguments for `balances`
#[derive(Args, Debug)]
pub struct BalancesArgs {
    /// Number of most recent ledger days to show
    #[arg(short, long, default_value = "7")]
    pub days: usize,
}

/// Handle `balances`
pub fn handle_balances_command(
    storage: &Storage,
    settings: &Settings,
    args: BalancesArgs,
) -> BudgetResult<()> {
    let service = BalanceService::new(storage);
    let current = service.current()?;

    print!("{}", format_balance_summary(&current, settings));

    if args.days > 0 {
        println!();
        println!("{}", format_balance_history(&service.history(args.days)?, settings));
    }

    Ok(())
}
