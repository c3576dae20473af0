//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod budget;
pub mod expense;
pub mod period;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use period::handle_reset_command;
pub use report::{handle_export_command, handle_summary_command};

use crate::error::{EasyBudgetError, EasyBudgetResult};
use crate::models::Money;

/// Parse an amount typed on the command line
pub(crate) fn parse_amount(s: &str) -> EasyBudgetResult<Money> {
    Money::parse(s).map_err(|e| EasyBudgetError::InvalidInput(e.to_string()))
}

/// Convert a 1-based expense number as displayed into a ledger index
pub(crate) fn expense_index(number: usize) -> EasyBudgetResult<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| EasyBudgetError::invalid("expense numbers start at 1"))
}
