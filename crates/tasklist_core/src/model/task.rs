//! Task domain model.
//!
//! # Responsibility
//! - Define the record persisted for every to-do entry.
//! - Provide construction and text normalization helpers.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused.
//! - `text` is trimmed and non-empty for every stored task.
//! - `created_at` is Unix epoch milliseconds and is not used for display.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Opaque stable identifier of a task.
///
/// Persisted as a plain string, so identifiers written by other producers
/// are accepted as long as they are unique within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh collision-resistant identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation error for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText(id) => write!(f, "task {id} has empty text"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds, serialized as `createdAt`.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates an incomplete task with a generated id and the current time.
    ///
    /// Returns `None` when `text` is blank; the stored text is trimmed.
    pub fn new(text: &str) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            id: TaskId::generate(),
            text,
            completed: false,
            created_at: now_epoch_ms(),
        })
    }

    /// Creates a task with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests; performs no validation.
    pub fn with_id(
        id: impl Into<TaskId>,
        text: impl Into<String>,
        completed: bool,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
            created_at,
        }
    }

    /// Checks the stored-text invariant.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText(self.id.clone()));
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Trims `text`, returning `None` when nothing is left.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether the add control should accept `text` as a new task.
pub fn can_submit(text: &str) -> bool {
    !text.trim().is_empty()
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
