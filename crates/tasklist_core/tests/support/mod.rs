//! Shared key-value store doubles for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use tasklist_core::db::DbError;
use tasklist_core::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore};

/// Switches flipped from the test body while the store is owned elsewhere.
#[derive(Debug, Default)]
pub struct Faults {
    pub reads: Cell<bool>,
    pub writes: Cell<bool>,
}

/// Memory store whose reads or writes can be made to fail.
pub struct FaultyStore {
    inner: MemoryKeyValueStore,
    faults: Rc<Faults>,
}

impl FaultyStore {
    pub fn new() -> (Self, Rc<Faults>) {
        Self::wrap(MemoryKeyValueStore::new())
    }

    pub fn with_entry(key: &str, value: &str) -> (Self, Rc<Faults>) {
        Self::wrap(MemoryKeyValueStore::with_entry(key, value))
    }

    fn wrap(inner: MemoryKeyValueStore) -> (Self, Rc<Faults>) {
        let faults = Rc::new(Faults::default());
        let store = Self {
            inner,
            faults: Rc::clone(&faults),
        };
        (store, faults)
    }
}

impl KeyValueStore for FaultyStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        if self.faults.reads.get() {
            return Err(KvError::Db(DbError::Query(
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
                    Some("database is locked".to_string()),
                ),
            )));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        if self.faults.writes.get() {
            return Err(KvError::WriteRejected(format!("quota exceeded for `{key}`")));
        }
        self.inner.set(key, value)
    }
}
