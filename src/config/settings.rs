//! User settings for EasyBudget
//!
//! Every field has a default, so a missing or partial `config.json` is fine.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::EasyBudgetPaths;
use crate::error::EasyBudgetError;
use crate::session::DEFAULT_NAMESPACE;
use crate::storage::{read_json, write_json_atomic};

/// User settings for EasyBudget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix of every partition key
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference for terminal output (strftime format).
    /// Stored ledgers and CSV exports always use `YYYY-MM-DD`.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category given to expenses added without one
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_category() -> String {
    "Other".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            namespace: default_namespace(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_category: default_category(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &EasyBudgetPaths) -> Result<Self, EasyBudgetError> {
        let settings: Settings = read_json(paths.settings_file())
            .map_err(|e| EasyBudgetError::Config(format!("Failed to load settings: {}", e)))?;

        if settings.namespace.trim().is_empty() {
            return Err(EasyBudgetError::Config("namespace cannot be empty".into()));
        }

        if StrftimeItems::new(&settings.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(EasyBudgetError::Config(format!(
                "invalid date_format '{}'",
                settings.date_format
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EasyBudgetPaths) -> Result<(), EasyBudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
