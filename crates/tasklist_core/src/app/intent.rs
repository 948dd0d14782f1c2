//! Tagged intents emitted by the presentation layer.
//!
//! # Responsibility
//! - Name every user action the core reacts to, replacing control introspection.
//!
//! # Invariants
//! - Edit intents carry the id of the task they were raised for, so intents
//!   from a closed session can be recognized as stale.

use crate::model::filter::FilterMode;
use crate::model::task::TaskId;

/// Discrete user intent emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddRequested(String),
    ToggleRequested(TaskId),
    DeleteRequested(TaskId),
    EditRequested(TaskId),
    /// Working text of the open edit changed.
    EditInputChanged(TaskId, String),
    /// Explicit confirm or focus loss on the editor.
    EditCommitted(TaskId, String),
    EditCancelled(TaskId),
    FilterChanged(FilterMode),
    ClearCompletedRequested,
}

impl Intent {
    /// Whether the intent is addressed to the edit session.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::EditRequested(_)
                | Self::EditInputChanged(..)
                | Self::EditCommitted(..)
                | Self::EditCancelled(_)
        )
    }

    /// Stable name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddRequested(_) => "add_requested",
            Self::ToggleRequested(_) => "toggle_requested",
            Self::DeleteRequested(_) => "delete_requested",
            Self::EditRequested(_) => "edit_requested",
            Self::EditInputChanged(..) => "edit_input_changed",
            Self::EditCommitted(..) => "edit_committed",
            Self::EditCancelled(_) => "edit_cancelled",
            Self::FilterChanged(_) => "filter_changed",
            Self::ClearCompletedRequested => "clear_completed_requested",
        }
    }
}
