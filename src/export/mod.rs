//! Export module for EasyBudget
//!
//! Serializes a period's expenses for use outside the application.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_file_name, EXPENSE_HEADER};
