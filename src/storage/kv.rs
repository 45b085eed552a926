//! Key-value persistence backends
//!
//! The budget is stored as one text value under one key. `FileStore` keeps
//! each key in its own JSON file inside the data directory; `MemoryStore`
//! keeps values in-process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::BudgetError;

use super::file_io::{read_text, write_text_atomic};

/// Minimal string key-value storage
pub trait KeyValueStore {
    /// Return the stored value, or `None` if the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError>;

    /// Overwrite the value for `key`
    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        (**self).set(key, value)
    }
}

/// Keys become file names, so only a conservative character set is allowed
fn check_key(key: &str) -> Result<(), BudgetError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(BudgetError::Storage(format!("Invalid storage key: {:?}", key)))
    }
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that backs `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        check_key(key)?;
        let path = self.path_for(key);
        debug!(path = %path.display(), "reading key");
        read_text(path)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        check_key(key)?;
        let path = self.path_for(key);
        debug!(path = %path.display(), bytes = value.len(), "writing key");
        write_text_atomic(path, value)
    }
}

/// In-process store, used by tests and embedders
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        let values = self
            .values
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("budgetState_v1").unwrap(), None);

        store.set("budgetState_v1", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("budgetState_v1").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert!(temp_dir.path().join("data").join("budgetState_v1.json").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.set("", "x").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.get("other").unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
