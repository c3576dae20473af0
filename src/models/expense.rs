//! Expense record model
//!
//! An expense has no identifier of its own; it is addressed by its position in
//! the ledger. An index taken before a deletion is stale afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{EasyBudgetError, EasyBudgetResult};

/// A single spending record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub name: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Free-text category label ("Food", "Transport", ...)
    #[serde(default)]
    pub category: String,

    /// Day of the expense, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense, trimming the name and category
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            amount,
            category: category.into().trim().to_string(),
            date,
        }
    }

    /// Check the expense invariants: non-empty name, positive amount no larger
    /// than [`Money::MAX`]
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

/// Parse an ISO `YYYY-MM-DD` date; an empty string is a missing date
pub fn parse_expense_date(s: &str) -> EasyBudgetResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(EasyBudgetError::invalid("expense date is required"));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        EasyBudgetError::invalid(format!("'{}' is not a valid date (expected YYYY-MM-DD)", s))
    })
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "expense amount must be positive (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "expense amount {} exceeds the limit of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for EasyBudgetError {
    fn from(err: ExpenseValidationError) -> Self {
        EasyBudgetError::InvalidInput(err.to_string())
    }
}
