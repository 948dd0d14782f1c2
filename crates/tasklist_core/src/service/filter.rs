//! Active view filter and visible-subset derivation.
//!
//! # Invariants
//! - The mode is process-local and never persisted.
//! - `visible_subset` preserves collection order.

use crate::model::filter::FilterMode;
use crate::model::task::Task;
use log::debug;

/// Holder of the current filter mode; starts at `FilterMode::All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterController {
    mode: FilterMode,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Stores `mode`; returns whether it differed from the previous one.
    pub fn set_mode(&mut self, mode: FilterMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        debug!("event=filter_set module=filter status=ok mode={mode} changed={changed}");
        changed
    }

    pub fn visible<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        visible_subset(tasks, self.mode)
    }
}

/// Tasks shown under `mode`, in collection order.
pub fn visible_subset(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| match mode {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        })
        .collect()
}
