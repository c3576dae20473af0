//! Configuration module for EasyBudget
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EasyBudgetPaths;
pub use settings::Settings;
