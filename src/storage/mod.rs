//! Storage layer for EasyBudget
//!
//! Partition-keyed persistence: a `PersistenceBackend` moves strings, the
//! `LedgerStore` turns them into ledgers. File writes are atomic.

pub mod backend;
pub mod file_io;
pub mod ledger_store;

pub use backend::{FileBackend, MemoryBackend, PersistenceBackend};
pub use file_io::{read_json, write_json_atomic};
pub use ledger_store::LedgerStore;
