//! Config CLI command

use crate::config::{BudgetPaths, Settings};

/// Handle `config`: print resolved paths and settings
pub fn handle_config_command(paths: &BudgetPaths, settings: &Settings) {
    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Expense file:     {}", paths.expenses_file().display());
    println!("Balance file:     {}", paths.balances_file().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Activity log:     {}", paths.activity_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Display rows:     {}", settings.max_display_rows);
    println!("  Form year:        {}", settings.form_year());
    println!("  Sample expenses:  {}", settings.sample.expense_count);
    println!("  Sample days:      {}", settings.sample.history_days);
    println!(
        "  Starting balance: {}",
        settings.format_money(settings.sample.starting_balance)
    );
}
