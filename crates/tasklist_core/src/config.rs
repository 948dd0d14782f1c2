//! Runtime configuration for opening a task list.

use crate::repo::task_repo::DEFAULT_STORAGE_KEY;
use std::path::{Path, PathBuf};

/// File name used when callers only provide a data directory.
pub const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    /// Key under which the task list blob is stored.
    pub storage_key: String,
}

impl AppConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Places the default database file inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DEFAULT_DB_FILE_NAME))
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
