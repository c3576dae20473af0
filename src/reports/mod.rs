//! Reports module for EasyBudget
//!
//! Derived, read-only views over a ledger.

pub mod summary;

pub use summary::{compute_summary, CategoryTotals, Summary};
