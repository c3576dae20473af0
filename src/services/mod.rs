//! Service layer for EasyBudget
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, write-through persistence and derived summaries.

pub mod ledger;

pub use ledger::LedgerService;
