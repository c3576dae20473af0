//! Core data models for EasyBudget
//!
//! This module contains the data structures of the ledger domain: money
//! amounts, calendar periods, expenses and the per-period ledger.

pub mod expense;
pub mod ledger;
pub mod money;
pub mod period;

pub use expense::{parse_expense_date, Expense, ExpenseValidationError};
pub use ledger::{Confirmation, LedgerState};
pub use money::{Money, MoneyParseError};
pub use period::{PeriodKey, PeriodParseError};
