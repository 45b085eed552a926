use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_dashboard::cli::{
    handle_card_command, handle_checking_command, handle_config_command, handle_cost_command,
    handle_export_command, handle_extra_command, handle_income_command, handle_show_command,
    CardCommands, CheckingCommands, ConfigCommands, CostCommands, CostKind, ExportCommands,
    ExtraCommands, IncomeCommands,
};
use budget_dashboard::config::{paths::BudgetPaths, settings::Settings};
use budget_dashboard::logging::init_logging;
use budget_dashboard::services::BudgetService;
use budget_dashboard::storage::{open_file_store, STORAGE_KEY};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal monthly budget dashboard",
    long_about = "Track one monthly budget from the terminal: income, recurring and \
                  pending costs, credit card balances and discretionary spending, \
                  with the discretionary amount left for the month always at hand."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary and every budget entry
    Show,

    /// Monthly income
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Checking account balance
    #[command(subcommand)]
    Checking(CheckingCommands),

    /// Credit card balances
    #[command(subcommand)]
    Card(CardCommands),

    /// Recurring monthly costs
    #[command(subcommand)]
    Recurring(CostCommands),

    /// Anticipated costs not yet incurred
    #[command(subcommand)]
    Pending(CostCommands),

    /// Discretionary spending
    #[command(subcommand)]
    Extra(ExtraCommands),

    /// Export the budget
    #[command(subcommand)]
    Export(ExportCommands),

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let store = open_file_store(&paths)?;
    let mut service = BudgetService::initialize(store);

    match cli.command {
        Some(Commands::Show) => handle_show_command(&service, &settings)?,
        Some(Commands::Income(cmd)) => handle_income_command(&mut service, &settings, cmd)?,
        Some(Commands::Checking(cmd)) => handle_checking_command(&mut service, &settings, cmd)?,
        Some(Commands::Card(cmd)) => handle_card_command(&mut service, &settings, cmd)?,
        Some(Commands::Recurring(cmd)) => {
            handle_cost_command(&mut service, &settings, CostKind::Recurring, cmd)?
        }
        Some(Commands::Pending(cmd)) => {
            handle_cost_command(&mut service, &settings, CostKind::Pending, cmd)?
        }
        Some(Commands::Extra(cmd)) => handle_extra_command(&mut service, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&service, &settings, &paths, cmd)?,
        Some(Commands::Tui) => {
            budget_dashboard::tui::run_tui(
                service.state(),
                &settings,
                settings.export_dir(&paths),
            )?;
        }
        Some(Commands::Config { action }) => {
            let budget_file = service.repository().store().path_for(STORAGE_KEY);
            handle_config_command(&paths, &mut settings, &budget_file, action)?;
        }
        None => {
            println!("Budget Dashboard - personal monthly budget tracking");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget show' to see this month's budget.");
            println!("Run 'budget tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
