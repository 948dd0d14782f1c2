//! Core state and render cycle for a persistent to-do list.
//! This crate is the single source of truth for task list invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use app::{Intent, Presenter, TaskListApp};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{FilterMode, FilterModeParseError};
pub use model::task::{can_submit, Task, TaskId, TaskValidationError};
pub use repo::kv_store::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};
pub use repo::task_repo::{StoreError, StoreResult, TaskRepository, DEFAULT_STORAGE_KEY};
pub use service::edit_session::{EditResolution, EditSession};
pub use service::filter::{visible_subset, FilterController};
pub use service::task_store::TaskStore;
pub use view::render::{render, FilterTab, ListBody, ListView, RowView, PLACEHOLDER_MESSAGE};
