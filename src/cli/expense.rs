//! Expense CLI commands
//!
//! Expenses are addressed by the 1-based number shown by `expense list`.
//! Numbers shift after a deletion, so list again before the next edit.

use chrono::Local;
use clap::Subcommand;

use super::{expense_index, parse_amount};
use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{EasyBudgetError, EasyBudgetResult};
use crate::models::{parse_expense_date, Expense, PeriodKey};
use crate::services::LedgerService;
use crate::storage::PersistenceBackend;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses for the period
    List,

    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "1200" or "12.50")
        amount: String,
        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an expense; omitted fields keep their current value
    Edit {
        /// Expense number as shown by `expense list`
        number: usize,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense number as shown by `expense list`
        number: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command<B: PersistenceBackend>(
    service: &mut LedgerService<'_, B>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> EasyBudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::List => {
            println!("Expenses for {}", service.session().period());
            println!(
                "{}",
                format_expense_list(service.state().expenses(), symbol, date_format)
            );
        }
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => parse_expense_date(&date)?,
                None => Local::now().date_naive(),
            };
            let category = category.unwrap_or_else(|| settings.default_category.clone());

            let expense = Expense::new(name, amount, category, date);
            service.add_expense(expense.clone())?;
            println!(
                "Added #{}: {}",
                service.state().len(),
                format_expense(&expense, symbol, date_format)
            );
            note_outside_period(&expense, service.session().period(), date_format);
        }
        ExpenseCommands::Edit {
            number,
            name,
            amount,
            category,
            date,
        } => {
            let index = expense_index(number)?;
            let current = service
                .state()
                .expense(index)
                .cloned()
                .ok_or(EasyBudgetError::IndexOutOfRange {
                    index,
                    len: service.state().len(),
                })?;

            let amount = match amount {
                Some(amount) => parse_amount(&amount)?,
                None => current.amount,
            };
            let date = match date {
                Some(date) => parse_expense_date(&date)?,
                None => current.date,
            };
            let expense = Expense::new(
                name.unwrap_or(current.name),
                amount,
                category.unwrap_or(current.category),
                date,
            );

            service.edit_expense(index, expense.clone())?;
            println!(
                "Updated #{}: {}",
                number,
                format_expense(&expense, symbol, date_format)
            );
            note_outside_period(&expense, service.session().period(), date_format);
        }
        ExpenseCommands::Delete { number } => {
            let index = expense_index(number)?;
            let removed = service.delete_expense(index)?;
            println!(
                "Deleted #{}: {}",
                number,
                format_expense(&removed, symbol, date_format)
            );
        }
    }

    Ok(())
}

fn note_outside_period(expense: &Expense, period: PeriodKey, date_format: &str) {
    if !period.contains(expense.date) {
        println!(
            "Note: {} is outside {}; the expense is still recorded in {}.",
            expense.date.format(date_format),
            period,
            period
        );
    }
}

fn format_expense(expense: &Expense, symbol: &str, date_format: &str) -> String {
    format!(
        "{} ({}) - {} [{}]",
        expense.name,
        expense.category,
        expense.amount.format_with_symbol(symbol),
        expense.date.format(date_format)
    )
}
