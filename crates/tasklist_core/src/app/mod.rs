//! Intent dispatch tying store, filter, edit session and renderer together.
//!
//! # Responsibility
//! - Route tagged presentation intents to named handlers.
//! - Re-render the whole list after every intent.
//!
//! # Invariants
//! - Only the task store mutates the collection.
//! - Any intent not addressed to the edit session commits an open edit first,
//!   matching focus-loss semantics.
//! - The store receives at most one update/delete per edit session.
//! - A failed write is reported after the view is refreshed from the
//!   still-valid in-memory state.

mod intent;

pub use intent::Intent;

use crate::config::AppConfig;
use crate::db::open_db;
use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId};
use crate::repo::kv_store::{KeyValueStore, KvResult, SqliteKeyValueStore};
use crate::repo::task_repo::{StoreResult, TaskRepository};
use crate::service::edit_session::{EditResolution, EditSession};
use crate::service::filter::FilterController;
use crate::service::task_store::TaskStore;
use crate::view::render::{render, ListView};
use log::{debug, info};

/// Receiver of rendered views.
pub trait Presenter {
    fn present(&mut self, view: &ListView);
}

impl<F: FnMut(&ListView)> Presenter for F {
    fn present(&mut self, view: &ListView) {
        self(view);
    }
}

/// Records every presented view; handy for headless callers.
impl Presenter for Vec<ListView> {
    fn present(&mut self, view: &ListView) {
        self.push(view.clone());
    }
}

/// One independent task list instance.
pub struct TaskListApp<S: KeyValueStore, P: Presenter> {
    store: TaskStore<S>,
    filter: FilterController,
    edit: EditSession,
    presenter: P,
}

impl<P: Presenter> TaskListApp<SqliteKeyValueStore, P> {
    /// Opens the SQLite-backed list described by `config` and renders it once.
    ///
    /// # Errors
    /// - The database cannot be opened or its schema prepared.
    /// - The stored task list cannot be read.
    pub fn open(config: &AppConfig, presenter: P) -> KvResult<Self> {
        let conn = open_db(&config.db_path)?;
        let repo = TaskRepository::with_key(
            SqliteKeyValueStore::new(conn),
            config.storage_key.as_str(),
        );
        let app = Self::new(repo, presenter)?;
        info!(
            "event=app_open module=app status=ok count={}",
            app.tasks().len()
        );
        Ok(app)
    }
}

impl<S: KeyValueStore, P: Presenter> TaskListApp<S, P> {
    /// Loads the collection from `repo` and presents the initial view.
    ///
    /// # Errors
    /// - Returns the read failure without presenting anything.
    pub fn new(repo: TaskRepository<S>, presenter: P) -> KvResult<Self> {
        let mut app = Self {
            store: TaskStore::open(repo)?,
            filter: FilterController::new(),
            edit: EditSession::default(),
            presenter,
        };
        app.refresh();
        Ok(app)
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter.mode()
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Derives the current view without presenting it.
    pub fn view(&self) -> ListView {
        let tasks = self.store.tasks();
        render(&self.filter.visible(tasks), tasks)
            .with_filter(self.filter.mode())
            .with_edit(&self.edit)
    }

    /// Handles `intent`, then re-renders.
    ///
    /// # Errors
    /// - Returns the persistence failure of any write made for this intent.
    ///   The in-memory state keeps the mutation and the view is still refreshed.
    pub fn dispatch(&mut self, intent: Intent) -> StoreResult<()> {
        debug!("event=intent module=app kind={}", intent.kind());
        let resolved = if intent.is_edit() {
            Ok(())
        } else {
            self.resolve_open_edit()
        };

        let handled = match intent {
            Intent::AddRequested(text) => self.store.add(&text).map(drop),
            Intent::ToggleRequested(id) => self.store.toggle(&id).map(drop),
            Intent::DeleteRequested(id) => self.store.delete(&id).map(drop),
            Intent::EditRequested(id) => self.on_edit_requested(id),
            Intent::EditInputChanged(id, text) => {
                self.edit.set_working_text(&id, &text);
                Ok(())
            }
            Intent::EditCommitted(id, text) => self.on_edit_committed(&id, &text),
            Intent::EditCancelled(id) => {
                if self.edit.is_editing_task(&id) {
                    self.edit.cancel();
                }
                Ok(())
            }
            Intent::FilterChanged(mode) => {
                self.filter.set_mode(mode);
                Ok(())
            }
            Intent::ClearCompletedRequested => self.store.clear_completed().map(drop),
        };

        self.refresh();
        resolved.and(handled)
    }

    fn on_edit_requested(&mut self, id: TaskId) -> StoreResult<()> {
        let current_text = self
            .filter
            .visible(self.store.tasks())
            .into_iter()
            .find(|task| task.id == id)
            .map(|task| task.text.clone());
        let Some(current_text) = current_text else {
            debug!("event=edit_begin module=app status=skipped reason=not_visible");
            return Ok(());
        };

        match self.edit.begin(id, &current_text) {
            Some(forced) => self.apply_resolution(forced),
            None => Ok(()),
        }
    }

    fn on_edit_committed(&mut self, id: &TaskId, text: &str) -> StoreResult<()> {
        if !self.edit.set_working_text(id, text) {
            debug!("event=edit_commit module=app status=skipped reason=stale_session");
            return Ok(());
        }
        self.resolve_open_edit()
    }

    fn resolve_open_edit(&mut self) -> StoreResult<()> {
        match self.edit.commit() {
            Some(resolution) => self.apply_resolution(resolution),
            None => Ok(()),
        }
    }

    fn apply_resolution(&mut self, resolution: EditResolution) -> StoreResult<()> {
        match resolution {
            EditResolution::Update { id, text } => self.store.update(&id, &text).map(drop),
            EditResolution::Delete { id } => self.store.delete(&id).map(drop),
        }
    }

    fn refresh(&mut self) {
        let view = self.view();
        self.presenter.present(&view);
    }
}
