//! Ledger repository
//!
//! Loads and saves one `LedgerState` per partition key through a
//! `PersistenceBackend`. Values are JSON `{"budget": .., "expenses": [..]}`.

use tracing::{debug, warn};

use crate::error::{EasyBudgetError, EasyBudgetResult};
use crate::models::LedgerState;

use super::backend::PersistenceBackend;

/// Repository for per-partition ledger persistence
#[derive(Debug)]
pub struct LedgerStore<B> {
    backend: B,
}

impl<B: PersistenceBackend> LedgerStore<B> {
    /// Create a store over a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the ledger stored under `key`, or an empty one if none exists
    pub fn load(&self, key: &str) -> EasyBudgetResult<LedgerState> {
        let Some(raw) = self.backend.get(key)? else {
            debug!(key, "no stored ledger, starting empty");
            return Ok(LedgerState::default());
        };

        let state: LedgerState = serde_json::from_str(&raw).map_err(|e| {
            warn!(key, error = %e, "stored ledger is not valid JSON");
            EasyBudgetError::Storage(format!("Failed to parse ledger '{}': {}", key, e))
        })?;

        state.validate().map_err(|e| {
            warn!(key, error = %e, "stored ledger violates invariants");
            EasyBudgetError::Storage(format!("Stored ledger '{}' is invalid: {}", key, e))
        })?;

        debug!(key, expenses = state.len(), "loaded ledger");
        Ok(state)
    }

    /// Save `state` under `key`, overwriting any previous value
    pub fn save(&self, key: &str, state: &LedgerState) -> EasyBudgetResult<()> {
        let raw = serde_json::to_string(state)?;
        self.backend.set(key, &raw)?;
        debug!(key, expenses = state.len(), "saved ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use crate::storage::backend::{FileBackend, MemoryBackend};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::new();
        state.set_budget(Money::from_units(5000)).unwrap();
        for (name, units) in [("Lunch", 1200), ("Bus", 300), ("Tea", 20)] {
            state
                .add_expense(Expense::new(
                    name,
                    Money::from_units(units),
                    "Food",
                    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                ))
                .unwrap();
        }
        state
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = LedgerStore::new(MemoryBackend::new());
        let state = store.load("EasyBudget_nobody_2024-05").unwrap();
        assert!(state.is_blank());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let store = LedgerStore::new(MemoryBackend::new());
        let state = sample_state();

        store.save("k", &state).unwrap();
        assert_eq!(store.load("k").unwrap(), state);
    }

    #[test]
    fn test_save_is_idempotent() {
        let store = LedgerStore::new(MemoryBackend::new());
        let state = sample_state();

        store.save("k", &state).unwrap();
        store.save("k", &state).unwrap();
        assert_eq!(store.load("k").unwrap(), state);
        assert_eq!(store.backend().len().unwrap(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let store = LedgerStore::new(MemoryBackend::new());
        store.save("k", &sample_state()).unwrap();
        store.save("k", &LedgerState::new()).unwrap();
        assert!(store.load("k").unwrap().is_blank());
    }

    #[test]
    fn test_load_rejects_malformed_value() {
        let backend = MemoryBackend::new();
        backend.set("k", "not json").unwrap();
        let store = LedgerStore::new(backend);
        assert!(matches!(store.load("k"), Err(EasyBudgetError::Storage(_))));
    }

    #[test]
    fn test_load_rejects_invalid_budget() {
        let backend = MemoryBackend::new();
        backend.set("k", r#"{"budget": 0, "expenses": []}"#).unwrap();
        let store = LedgerStore::new(backend);
        assert!(matches!(store.load("k"), Err(EasyBudgetError::Storage(_))));
    }

    #[test]
    fn test_file_backed_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(FileBackend::new(temp_dir.path()));
        let state = sample_state();

        store.save("EasyBudget_alice_2024-05", &state).unwrap();

        let reopened = LedgerStore::new(FileBackend::new(temp_dir.path()));
        assert_eq!(reopened.load("EasyBudget_alice_2024-05").unwrap(), state);
        assert!(reopened.load("EasyBudget_alice_2024-06").unwrap().is_blank());
    }
}
