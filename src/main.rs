use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_activity_command, handle_add_command, handle_balances_command,
    handle_breakdown_command, handle_config_command, handle_list_command, ActivityArgs, AddArgs,
    BalancesArgs, BreakdownArgs, ListArgs,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::storage::{LoadOutcome, Storage};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal dashboard for tracking expenses and balances",
    long_about = "budget-tracker records expenses by spending category and keeps a \
                  daily ledger of account and savings balances. Run it without a \
                  subcommand to open the dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Record an expense and update the current balance
    Add(AddArgs),

    /// List recorded expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the current balances and recent ledger history
    Balances(BalancesArgs),

    /// Show spending by category for a month
    Breakdown(BreakdownArgs),

    /// Show recent entries from the activity log
    Activity(ActivityArgs),

    /// Show current configuration and paths
    Config,
}

fn report_generated(what: &str, outcome: LoadOutcome) {
    if let LoadOutcome::Generated(rows) = outcome {
        eprintln!("No {} found; generated {} sample rows.", what, rows);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    if let Some(Commands::Config) = cli.command {
        handle_config_command(&paths, &settings);
        return Ok(());
    }

    // Initialize storage
    let storage = Storage::open(&paths)?;
    let report = storage.load_all(&settings.sample)?;
    report_generated("expense data", report.expenses);
    report_generated("balance data", report.ledger);

    match cli.command {
        None | Some(Commands::Tui) => budget_tracker::tui::run_tui(&storage, &settings)?,
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, args)?,
        Some(Commands::Balances(args)) => handle_balances_command(&storage, &settings, args)?,
        Some(Commands::Breakdown(args)) => handle_breakdown_command(&storage, &settings, args)?,
        Some(Commands::Activity(args)) => handle_activity_command(&storage, args)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings),
    }

    Ok(())
}
