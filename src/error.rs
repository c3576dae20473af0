//! Custom error types for EasyBudget
//!
//! This module defines the error hierarchy for the ledger engine using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for EasyBudget operations
#[derive(Error, Debug)]
pub enum EasyBudgetError {
    /// Rejected user input: non-positive amount, empty name, missing date
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Edit or delete of a budget that was never set
    #[error("No budget set for this period")]
    NoBudgetSet,

    /// Expense index outside `[0, len)`
    #[error("Expense index {index} is out of range (ledger has {len} expenses)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persistence backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl EasyBudgetError {
    /// Create an "invalid input" error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this error was raised by a precondition check.
    ///
    /// Validation errors never leave the ledger modified.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::NoBudgetSet | Self::IndexOutOfRange { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EasyBudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EasyBudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for EasyBudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for EasyBudget operations
pub type EasyBudgetResult<T> = Result<T, EasyBudgetError>;
