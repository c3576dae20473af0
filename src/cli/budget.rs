//! Budget CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::format_budget_line;
use crate::error::EasyBudgetResult;
use crate::models::Confirmation;
use crate::services::LedgerService;
use crate::storage::PersistenceBackend;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget for the period
    Show,

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "5000" or "5000.00")
        amount: String,
    },

    /// Change an existing budget
    Edit {
        /// New amount
        amount: String,
    },

    /// Delete the budget
    Delete {
        /// Skip the confirmation notice and delete
        #[arg(long)]
        force: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command<B: PersistenceBackend>(
    service: &mut LedgerService<'_, B>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> EasyBudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            println!("{}", format_budget_line(service.state().budget(), symbol));
        }
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_budget(amount)?;
            println!("Budget set to {}", amount.format_with_symbol(symbol));
        }
        BudgetCommands::Edit { amount } => {
            let amount = parse_amount(&amount)?;
            service.edit_budget(amount)?;
            println!("Budget changed to {}", amount.format_with_symbol(symbol));
        }
        BudgetCommands::Delete { force } => {
            if service.delete_budget(Confirmation::from(force))? {
                println!("Budget deleted for {}", service.session().period());
            } else {
                println!("This will delete the budget for {}.", service.session().period());
                println!("To proceed, run again with --force flag:");
                println!("  easybudget budget delete --force");
            }
        }
    }

    Ok(())
}
