//! Storage layer for the budget dashboard
//!
//! Provides key-value persistence with atomic JSON file writes, and the
//! repository that stores the budget under its canonical key.

pub mod file_io;
pub mod kv;
pub mod state;

pub use file_io::{read_text, write_json_atomic, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use state::{StateRepository, STORAGE_KEY};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Open the on-disk store under the data directory
pub fn open_file_store(paths: &BudgetPaths) -> Result<FileStore, BudgetError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}
