//! Task store use-case service.
//!
//! # Responsibility
//! - Own the authoritative `TaskList` for one UI session.
//! - Provide add/update/complete/delete entry points for host UIs.
//! - Emit metadata-only diagnostic events for every mutation.
//!
//! # Invariants
//! - All writes go through the command reducer.
//! - Unknown ids are silent no-ops at this surface.
//! - Task titles never appear in log output.

use crate::model::task::{Task, TaskId};
use crate::model::title::TitleValidationError;
use crate::state::command::{self as reducer, CommandOutcome, TaskCommand};
use crate::state::task_list::{TaskList, TaskListError, TaskListView};
use log::{debug, info, warn};

/// Owner of the task collection.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    state: TaskList,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an existing state value.
    pub fn from_state(state: TaskList) -> Self {
        Self { state }
    }

    /// Creates a store seeded with existing tasks.
    ///
    /// # Errors
    /// Returns [`TaskListError`] for duplicate, descending or out-of-range
    /// ids and for invalid titles.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskListError> {
        TaskList::from_tasks(tasks).map(Self::from_state)
    }

    /// Creates a store holding the starter tasks.
    pub fn with_demo_tasks() -> Self {
        Self::from_state(TaskList::demo())
    }

    /// Adds an active task with a store-assigned id.
    ///
    /// # Contract
    /// - `title` is trimmed and validated like an update.
    /// - The new task is appended; no other task changes.
    pub fn add_task(&mut self, title: impl Into<String>) -> Result<Task, TitleValidationError> {
        let result = reducer::add(&mut self.state, &title.into());
        match &result {
            Ok(task) => log_added(task.id, self.state.len()),
            Err(err) => log_rejected(err),
        }
        result
    }

    /// Replaces the title of task `id`.
    ///
    /// # Contract
    /// - Invalid input returns the validation error and changes nothing.
    /// - Unknown `id` returns `Ok(())` and changes nothing.
    /// - `id` and `done` are preserved.
    pub fn update_task(
        &mut self,
        id: TaskId,
        new_title: impl Into<String>,
    ) -> Result<(), TitleValidationError> {
        match self.apply(TaskCommand::UpdateTitle {
            id,
            title: new_title.into(),
        }) {
            CommandOutcome::Rejected(err) => Err(err),
            _ => Ok(()),
        }
    }

    /// Marks task `id` done. Repeating the call is harmless.
    pub fn complete_task(&mut self, id: TaskId) {
        self.apply(TaskCommand::Complete { id });
    }

    /// Removes task `id` permanently. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        self.apply(TaskCommand::Delete { id });
    }

    /// Applies one command and returns its outcome.
    pub fn apply(&mut self, command: TaskCommand) -> CommandOutcome {
        let outcome = reducer::apply(&mut self.state, command);
        log_outcome(&outcome, self.state.len());
        outcome
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.state.get(id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> Vec<Task> {
        self.state.tasks()
    }

    /// Display snapshot for the rendering layer.
    pub fn snapshot(&self) -> TaskListView {
        self.state.view()
    }

    pub fn active_count(&self) -> usize {
        self.state.active_count()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Read-only view of the current state value.
    pub fn state(&self) -> &TaskList {
        &self.state
    }

    /// Consumes the store and returns its state value.
    pub fn into_state(self) -> TaskList {
        self.state
    }
}

fn log_outcome(outcome: &CommandOutcome, total: usize) {
    match outcome {
        CommandOutcome::Added(task) => log_added(task.id, total),
        CommandOutcome::Updated(id) => {
            info!("event=task_update module=store status=ok id={id}")
        }
        CommandOutcome::Completed(id) => {
            info!("event=task_complete module=store status=ok id={id}")
        }
        CommandOutcome::Deleted(id) => {
            info!("event=task_delete module=store status=ok id={id} total={total}")
        }
        CommandOutcome::Rejected(err) => log_rejected(err),
        CommandOutcome::Missing(id) => {
            debug!("event=task_lookup module=store status=missing id={id}")
        }
    }
}

fn log_added(id: TaskId, total: usize) {
    info!("event=task_add module=store status=ok id={id} total={total}");
}

fn log_rejected(err: &TitleValidationError) {
    warn!(
        "event=task_write module=store status=rejected reason={}",
        rejection_reason(err)
    );
}

fn rejection_reason(err: &TitleValidationError) -> &'static str {
    match err {
        TitleValidationError::Empty => "empty_title",
        TitleValidationError::TooLong { .. } => "title_too_long",
    }
}
