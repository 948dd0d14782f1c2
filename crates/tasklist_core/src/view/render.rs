//! Display projection of the task list.
//!
//! # Responsibility
//! - Derive a complete display description from state on every render.
//! - Compute counters from the full collection, not the filtered subset.
//!
//! # Invariants
//! - An empty visible subset yields exactly one placeholder and no rows.
//! - Rows follow the visible subset order one-to-one.
//!
//! Every render rebuilds the whole list; fine for small lists, a known
//! scalability limit for large ones.

use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId};
use crate::service::edit_session::EditSession;

/// Message shown when the visible subset is empty.
pub const PLACEHOLDER_MESSAGE: &str = "No tasks here. Add one above.";

/// One displayed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Correlates presentation events back to the task.
    pub id: TaskId,
    pub completed: bool,
    pub text: String,
    /// Working text while this row is under edit.
    pub editing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// Non-interactive entry standing in for an empty visible subset.
    Placeholder { message: &'static str },
    Rows(Vec<RowView>),
}

/// Filter selector entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTab {
    pub mode: FilterMode,
    pub selected: bool,
}

/// Full display description handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub body: ListBody,
    /// Incomplete tasks across the whole collection.
    pub remaining_count: usize,
    /// True iff any task in the whole collection is completed.
    pub clear_completed_enabled: bool,
    pub filters: Vec<FilterTab>,
}

impl ListView {
    /// Displayed rows; empty when the placeholder is shown.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            ListBody::Placeholder { .. } => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, ListBody::Placeholder { .. })
    }

    pub fn row_texts(&self) -> Vec<&str> {
        self.rows().iter().map(|row| row.text.as_str()).collect()
    }

    pub fn selected_filter(&self) -> Option<FilterMode> {
        self.filters
            .iter()
            .find(|tab| tab.selected)
            .map(|tab| tab.mode)
    }

    /// Marks the tab for `mode` as selected.
    pub fn with_filter(mut self, mode: FilterMode) -> Self {
        for tab in &mut self.filters {
            tab.selected = tab.mode == mode;
        }
        self
    }

    /// Attaches the working text of an open edit to its row.
    pub fn with_edit(mut self, session: &EditSession) -> Self {
        let (Some(id), Some(text)) = (session.editing_id(), session.working_text()) else {
            return self;
        };
        if let ListBody::Rows(rows) = &mut self.body {
            if let Some(row) = rows.iter_mut().find(|row| &row.id == id) {
                row.editing = Some(text.to_string());
            }
        }
        self
    }
}

/// Projects `visible` and the full collection `all` into a display tree.
///
/// The returned view selects the `All` tab; callers adjust it with
/// [`ListView::with_filter`].
pub fn render(visible: &[&Task], all: &[Task]) -> ListView {
    let body = if visible.is_empty() {
        ListBody::Placeholder {
            message: PLACEHOLDER_MESSAGE,
        }
    } else {
        ListBody::Rows(
            visible
                .iter()
                .map(|task| RowView {
                    id: task.id.clone(),
                    completed: task.completed,
                    text: task.text.clone(),
                    editing: None,
                })
                .collect(),
        )
    };

    ListView {
        body,
        remaining_count: all.iter().filter(|task| task.is_active()).count(),
        clear_completed_enabled: all.iter().any(|task| task.completed),
        filters: FilterMode::ALL
            .iter()
            .map(|&mode| FilterTab {
                mode,
                selected: mode == FilterMode::default(),
            })
            .collect(),
    }
}
