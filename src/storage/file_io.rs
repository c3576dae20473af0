//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::EasyBudgetError;

/// Read a whole file as UTF-8, returning `None` if it doesn't exist
pub fn read_string<P: AsRef<Path>>(path: P) -> Result<Option<String>, EasyBudgetError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(EasyBudgetError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, EasyBudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        EasyBudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        EasyBudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write a string to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_string_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), EasyBudgetError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            EasyBudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| EasyBudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| EasyBudgetError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| EasyBudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| EasyBudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        EasyBudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write pretty-printed JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), EasyBudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let contents = serde_json::to_string_pretty(data)
        .map_err(|e| EasyBudgetError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_string_atomic(path, &contents)
}
