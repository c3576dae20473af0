//! Persistence backends
//!
//! A backend is a durable key → string map. The ledger store owns the JSON
//! encoding; backends only move strings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{EasyBudgetError, EasyBudgetResult};

use super::file_io::{read_string, write_string_atomic};

/// Durable key → string store
pub trait PersistenceBackend {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> EasyBudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> EasyBudgetResult<()>;
}

/// Process-local backend, used for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> EasyBudgetResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| EasyBudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> EasyBudgetResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl PersistenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> EasyBudgetResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| EasyBudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> EasyBudgetResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| EasyBudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory
///
/// Key characters outside `[A-Za-z0-9_-]` are percent-encoded so any user id
/// yields a safe, distinct file name.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }
}

impl PersistenceBackend for FileBackend {
    fn get(&self, key: &str) -> EasyBudgetResult<Option<String>> {
        read_string(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> EasyBudgetResult<()> {
        write_string_atomic(self.path_for(key), value)
    }
}

fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}
