//! Exclusive in-place text edit of a single task.
//!
//! # Responsibility
//! - Track the one open edit and its working text.
//! - Turn commit/cancel transitions into at most one store call per session.
//!
//! # Invariants
//! - At most one session is open at any time.
//! - Opening a new session while one is open resolves the old one by commit.
//! - Once committed or cancelled a session is gone; a second commit is a no-op.

use crate::model::task::{normalize_text, TaskId};
use log::debug;

/// Store call produced by committing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResolution {
    Update { id: TaskId, text: String },
    Delete { id: TaskId },
}

impl EditResolution {
    pub fn id(&self) -> &TaskId {
        match self {
            Self::Update { id, .. } | Self::Delete { id } => id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { id: TaskId, working_text: String },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Id of the task under edit, if any.
    pub fn editing_id(&self) -> Option<&TaskId> {
        match self {
            Self::Editing { id, .. } => Some(id),
            Self::Idle => None,
        }
    }

    pub fn is_editing_task(&self, task: &TaskId) -> bool {
        self.editing_id() == Some(task)
    }

    pub fn working_text(&self) -> Option<&str> {
        match self {
            Self::Editing { working_text, .. } => Some(working_text.as_str()),
            Self::Idle => None,
        }
    }

    /// Opens a session on `id` seeded with `current_text`.
    ///
    /// A session already open on another task is committed first and its
    /// resolution returned; reopening the task already under edit keeps the
    /// working text and returns `None`.
    pub fn begin(&mut self, id: TaskId, current_text: &str) -> Option<EditResolution> {
        if self.is_editing_task(&id) {
            return None;
        }
        let previous = self.commit();
        debug!("event=edit_begin module=edit status=ok forced_commit={}", previous.is_some());
        *self = Self::Editing {
            id,
            working_text: current_text.to_string(),
        };
        previous
    }

    /// Replaces the working text when `id` is the task under edit.
    pub fn set_working_text(&mut self, id: &TaskId, text: &str) -> bool {
        match self {
            Self::Editing {
                id: open,
                working_text,
            } if open == id => {
                *working_text = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Ends the session, yielding an update or a delete for blank text.
    pub fn commit(&mut self) -> Option<EditResolution> {
        let Self::Editing { id, working_text } = std::mem::take(self) else {
            return None;
        };
        let resolution = match normalize_text(&working_text) {
            Some(text) => EditResolution::Update { id, text },
            None => EditResolution::Delete { id },
        };
        debug!(
            "event=edit_commit module=edit status=ok delete={}",
            matches!(resolution, EditResolution::Delete { .. })
        );
        Some(resolution)
    }

    /// Discards the session; returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.is_editing();
        *self = Self::Idle;
        if was_editing {
            debug!("event=edit_cancel module=edit status=ok");
        }
        was_editing
    }
}
