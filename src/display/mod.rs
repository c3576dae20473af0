//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_budget_line, format_expense_list};
