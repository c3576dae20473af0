use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use easybudget::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_reset_command,
    handle_summary_command, BudgetCommands, ExpenseCommands,
};
use easybudget::config::{EasyBudgetPaths, Settings};
use easybudget::logging::init_tracing;
use easybudget::models::PeriodKey;
use easybudget::services::LedgerService;
use easybudget::session::SessionContext;
use easybudget::storage::{FileBackend, LedgerStore};

#[derive(Parser)]
#[command(
    name = "easybudget",
    version,
    about = "Track monthly spending against a budget",
    long_about = "EasyBudget keeps a monthly budget and a list of expenses per user \
                  and calendar month, and shows how much is spent and left."
)]
struct Cli {
    /// User whose ledger to open
    #[arg(short, long, env = "EASYBUDGET_USER", global = true)]
    user: Option<String>,

    /// Period to work on (YYYY-MM, defaults to the current month)
    #[arg(short, long, global = true)]
    period: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Ledger(LedgerCommands),
}

/// Commands that operate on the user's ledger for the period
#[derive(Subcommand)]
enum LedgerCommands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show total spent, remaining budget and category totals
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the period's expenses to CSV
    Export {
        /// Output file ("-" for stdout, defaults to <namespace>_<YYYY-MM>.csv)
        output: Option<PathBuf>,
    },

    /// Clear the budget and all expenses of the period
    Reset {
        /// Skip the confirmation notice and clear
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = EasyBudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Config) => {
            println!("EasyBudget Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Namespace:        {}", settings.namespace);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            return Ok(());
        }
        Some(Commands::Ledger(command)) => command,
        None => {
            println!("EasyBudget - monthly spending tracker");
            println!();
            println!("Run 'easybudget --help' for usage information.");
            return Ok(());
        }
    };

    let user = cli
        .user
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| anyhow!("Enter username (--user or EASYBUDGET_USER)"))?;

    let period = match cli.period {
        Some(p) => PeriodKey::parse(&p)?,
        None => PeriodKey::current(),
    };

    let session = SessionContext::start_at(&user, period).with_namespace(&settings.namespace);
    let store = LedgerStore::new(FileBackend::new(paths.data_dir()));
    let mut service = LedgerService::open(&store, session)?;

    match command {
        LedgerCommands::Budget(cmd) => handle_budget_command(&mut service, &settings, cmd)?,
        LedgerCommands::Expense(cmd) => handle_expense_command(&mut service, &settings, cmd)?,
        LedgerCommands::Summary { json } => handle_summary_command(&service, &settings, json)?,
        LedgerCommands::Export { output } => handle_export_command(&service, output)?,
        LedgerCommands::Reset { force } => handle_reset_command(&mut service, force)?,
    }

    Ok(())
}
