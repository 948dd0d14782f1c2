//! Task collection persistence over a key-value store.
//!
//! # Responsibility
//! - Read and write the whole task collection as one JSON array blob.
//! - Recover from absent or corrupt data by yielding an empty collection.
//!
//! # Invariants
//! - Absent, unparseable or non-array data loads as an empty collection.
//! - A failed read is returned, never mistaken for absent data.
//! - `save` always writes the full collection, overwriting the previous blob.
//! - Write failures are surfaced to the caller, never swallowed.

use crate::model::task::Task;
use crate::repo::kv_store::{KeyValueStore, KvError, KvResult};
use log::{debug, error, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used when no override is configured.
pub const DEFAULT_STORAGE_KEY: &str = "todo-list-v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure to persist the task collection.
#[derive(Debug)]
pub enum StoreError {
    Serialize(serde_json::Error),
    Write(KvError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize task list: {err}"),
            Self::Write(err) => write!(f, "failed to write task list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Write(value)
    }
}

/// Persistence adapter storing the task list under a single key.
pub struct TaskRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskRepository<S> {
    /// Creates a repository using [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the persisted collection, or an empty one when absent or corrupt.
    ///
    /// # Errors
    /// - Returns the store error when the read itself fails, so callers
    ///   never overwrite data they could not see.
    pub fn load(&self) -> KvResult<Vec<Task>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=tasks_load module=repo status=empty reason=absent");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=tasks_load module=repo status=error error_code=kv_read_failed error={err}"
                );
                return Err(err);
            }
        };

        match decode_tasks(&raw) {
            Ok(tasks) => {
                debug!(
                    "event=tasks_load module=repo status=ok count={}",
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(reason) => {
                warn!(
                    "event=tasks_load module=repo status=recovered reason={reason} bytes={}",
                    raw.len()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes `tasks` and writes them under the configured key.
    pub fn save(&mut self, tasks: &[Task]) -> StoreResult<()> {
        let blob = serde_json::to_string(tasks)?;
        if let Err(err) = self.store.set(&self.key, &blob) {
            error!(
                "event=tasks_save module=repo status=error error_code=kv_write_failed count={} error={err}",
                tasks.len()
            );
            return Err(err.into());
        }
        debug!(
            "event=tasks_save module=repo status=ok count={} bytes={}",
            tasks.len(),
            blob.len()
        );
        Ok(())
    }
}

fn decode_tasks(raw: &str) -> Result<Vec<Task>, &'static str> {
    let value: Value = serde_json::from_str(raw).map_err(|_| "unparseable")?;
    if !value.is_array() {
        return Err("not_an_array");
    }
    let records: Vec<Task> = serde_json::from_value(value).map_err(|_| "invalid_record")?;
    Ok(retain_well_formed(records))
}

/// Drops blank-text records and records repeating an earlier id.
fn retain_well_formed(records: Vec<Task>) -> Vec<Task> {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let tasks: Vec<Task> = records
        .into_iter()
        .filter(|task| task.validate().is_ok() && seen.insert(task.id.clone()))
        .collect();

    if tasks.len() != total {
        warn!(
            "event=tasks_load module=repo status=filtered dropped={}",
            total - tasks.len()
        );
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::{decode_tasks, TaskRepository, DEFAULT_STORAGE_KEY};
    use crate::model::task::Task;
    use crate::repo::kv_store::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn decode_rejects_non_array_values() {
        assert_eq!(decode_tasks("{\"id\":\"a\"}"), Err("not_an_array"));
        assert_eq!(decode_tasks("null"), Err("not_an_array"));
        assert_eq!(decode_tasks("not json"), Err("unparseable"));
        assert_eq!(decode_tasks("[{\"id\":1}]"), Err("invalid_record"));
    }

    #[test]
    fn decode_drops_blank_and_duplicate_records() {
        let raw = r#"[
            {"id":"a","text":"keep","completed":false,"createdAt":1},
            {"id":"b","text":"  ","completed":false,"createdAt":2},
            {"id":"a","text":"dup","completed":true,"createdAt":3}
        ]"#;
        let tasks = decode_tasks(raw).unwrap();
        assert_eq!(tasks, vec![Task::with_id("a", "keep", false, 1)]);
    }

    #[test]
    fn save_writes_under_configured_key() {
        let mut repo = TaskRepository::with_key(MemoryKeyValueStore::new(), "custom");
        repo.save(&[Task::with_id("a", "x", false, 1)]).unwrap();

        assert!(repo.store().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
        let raw = repo.store().get("custom").unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"a","text":"x","completed":false,"createdAt":1}]"#
        );
    }
}
