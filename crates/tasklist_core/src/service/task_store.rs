//! In-memory task collection with write-through persistence.
//!
//! # Responsibility
//! - Own the single ordered task collection for the process.
//! - Apply create/toggle/update/delete/clear-completed mutations.
//! - Persist the full collection after every mutation that changes it.
//!
//! # Invariants
//! - Newly created tasks are prepended (most recent first).
//! - No two tasks share an id; ids are never reused.
//! - Blank text and unknown ids are absorbed as no-ops, never errors.
//! - A failed write leaves the in-memory mutation applied.

use crate::model::task::{normalize_text, Task, TaskId};
use crate::repo::kv_store::{KeyValueStore, KvResult};
use crate::repo::task_repo::{StoreResult, TaskRepository};
use log::debug;

/// Owner of the task collection.
pub struct TaskStore<S: KeyValueStore> {
    repo: TaskRepository<S>,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads the persisted collection through `repo`.
    ///
    /// # Errors
    /// - Returns the read failure; no store exists that could overwrite
    ///   the unread data.
    pub fn open(repo: TaskRepository<S>) -> KvResult<Self> {
        let tasks = repo.load()?;
        Ok(Self { repo, tasks })
    }

    /// Current collection in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }

    /// Prepends a new task; returns its id, or `None` for blank text.
    pub fn add(&mut self, text: &str) -> StoreResult<Option<TaskId>> {
        let Some(task) = Task::new(text) else {
            debug!("event=task_add module=store status=skipped reason=blank_text");
            return Ok(None);
        };
        let id = task.id.clone();
        self.tasks.insert(0, task);
        debug!(
            "event=task_add module=store status=ok count={}",
            self.tasks.len()
        );
        self.persist()?;
        Ok(Some(id))
    }

    /// Flips completion on `id`; returns whether a task matched.
    pub fn toggle(&mut self, id: &TaskId) -> StoreResult<bool> {
        let Some(task) = self.find_mut(id) else {
            debug!("event=task_toggle module=store status=skipped reason=not_found");
            return Ok(false);
        };
        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=store status=ok completed={}",
            task.completed
        );
        self.persist()?;
        Ok(true)
    }

    /// Replaces the text of `id`, deleting the task when `text` is blank.
    ///
    /// Returns whether the collection changed.
    pub fn update(&mut self, id: &TaskId, text: &str) -> StoreResult<bool> {
        let Some(text) = normalize_text(text) else {
            return self.delete(id);
        };
        let Some(task) = self.find_mut(id) else {
            debug!("event=task_update module=store status=skipped reason=not_found");
            return Ok(false);
        };
        if task.text == text {
            return Ok(false);
        }
        task.text = text;
        debug!("event=task_update module=store status=ok");
        self.persist()?;
        Ok(true)
    }

    /// Removes `id`, keeping the relative order of the rest.
    pub fn delete(&mut self, id: &TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=store status=skipped reason=not_found");
            return Ok(false);
        }
        debug!(
            "event=task_delete module=store status=ok count={}",
            self.tasks.len()
        );
        self.persist()?;
        Ok(true)
    }

    /// Removes every completed task; returns how many were removed.
    pub fn clear_completed(&mut self) -> StoreResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }
        debug!("event=tasks_clear_completed module=store status=ok removed={removed}");
        self.persist()?;
        Ok(removed)
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.repo.save(&self.tasks)
    }
}
