//! Activity log CLI command

use clap::Args;

use crate::error::BudgetResult;
use crate::storage::Storage;

/// Arguments for `activity`
#[derive(Args, Debug)]
pub struct ActivityArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `activity`
pub fn handle_activity_command(storage: &Storage, args: ActivityArgs) -> BudgetResult<()> {
    let Some(logger) = storage.activity() else {
        println!("Activity logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(args.limit)?;
    if entries.is_empty() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = logger.entry_count()?;
    if entries.len() < total {
        println!();
        println!("Showing {} of {} entries", entries.len(), total);
    }

    Ok(())
}
