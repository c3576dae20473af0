//! Path management for EasyBudget
//!
//! ## Path Resolution Order
//!
//! 1. `EASYBUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `easybudget`
//!    (e.g. `~/.config/easybudget` on Linux, `%APPDATA%\easybudget` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::EasyBudgetError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EASYBUDGET_DATA_DIR";

/// Manages all paths used by EasyBudget
#[derive(Debug, Clone)]
pub struct EasyBudgetPaths {
    /// Base directory for all EasyBudget data
    base_dir: PathBuf,
}

impl EasyBudgetPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, EasyBudgetError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "easybudget")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    EasyBudgetError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create EasyBudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one ledger file per partition
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), EasyBudgetError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EasyBudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EasyBudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EasyBudgetPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());
    }
}
