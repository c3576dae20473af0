//! EasyBudget - monthly spending tracker
//!
//! This library is the ledger and aggregation engine behind EasyBudget. It
//! keeps one ledger (an optional monthly budget plus an ordered list of
//! expenses) per user and calendar month, persists every change immediately,
//! and derives spending summaries from the stored records.
//!
//! # Architecture
//!
//! - `session`: active user and period, and the partition key derived from them
//! - `models`: money, periods, expenses and the validated ledger state
//! - `storage`: key/value persistence backends and the ledger store
//! - `services`: write-through ledger operations for the active session
//! - `reports`: summary computation
//! - `export`: CSV export
//! - `config`, `display`, `cli`, `logging`: the terminal front end
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use easybudget::models::{Expense, Money, PeriodKey};
//! use easybudget::services::LedgerService;
//! use easybudget::session::SessionContext;
//! use easybudget::storage::{LedgerStore, MemoryBackend};
//!
//! let store = LedgerStore::new(MemoryBackend::new());
//! let session = SessionContext::start_at("alice", PeriodKey::new(2024, 5).unwrap());
//! let mut ledger = LedgerService::open(&store, session).unwrap();
//!
//! ledger.set_budget(Money::from_units(5000)).unwrap();
//! ledger
//!     .add_expense(Expense::new(
//!         "Lunch",
//!         Money::from_units(1200),
//!         "Food",
//!         NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
//!     ))
//!     .unwrap();
//!
//! assert_eq!(ledger.summary().remaining, Some(Money::from_units(3800)));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{EasyBudgetError, EasyBudgetResult};
