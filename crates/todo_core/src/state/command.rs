//! Task commands and the state transition function.
//!
//! # Responsibility
//! - Express every task mutation as a value (`TaskCommand`).
//! - Apply commands as `(state, command) -> (state, outcome)` transitions
//!   that any host binding can drive.
//!
//! # Invariants
//! - `reduce` never mutates its input state.
//! - `Rejected` and `Missing` outcomes leave the state unchanged.
//! - Titles are validated before any write, on add and update alike.

use crate::model::task::{Task, TaskId};
use crate::model::title::{validate_title, TitleValidationError};
use crate::state::task_list::TaskList;

/// One task mutation requested by a host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Append a new active task.
    Add { title: String },
    /// Replace the title of an existing task.
    UpdateTitle { id: TaskId, title: String },
    /// Mark a task done.
    Complete { id: TaskId },
    /// Remove a task.
    Delete { id: TaskId },
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Task),
    Updated(TaskId),
    Completed(TaskId),
    Deleted(TaskId),
    /// Title input failed validation; nothing changed.
    Rejected(TitleValidationError),
    /// No task with this id; nothing changed.
    Missing(TaskId),
}

impl CommandOutcome {
    /// Returns whether the command reached a task and was carried out.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Rejected(_) | Self::Missing(_))
    }
}

/// Next state paired with the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TaskList,
    pub outcome: CommandOutcome,
}

/// Applies `command` to a copy of `state`.
pub fn reduce(state: &TaskList, command: TaskCommand) -> Transition {
    let mut next = state.clone();
    let outcome = apply(&mut next, command);
    Transition {
        state: next,
        outcome,
    }
}

/// In-place form of [`reduce`], used by owners that hold the only copy.
pub(crate) fn apply(state: &mut TaskList, command: TaskCommand) -> CommandOutcome {
    match command {
        TaskCommand::Add { title } => match add(state, &title) {
            Ok(task) => CommandOutcome::Added(task),
            Err(err) => CommandOutcome::Rejected(err),
        },
        TaskCommand::UpdateTitle { id, title } => match update_title(state, id, &title) {
            Ok(true) => CommandOutcome::Updated(id),
            Ok(false) => CommandOutcome::Missing(id),
            Err(err) => CommandOutcome::Rejected(err),
        },
        TaskCommand::Complete { id } => {
            if state.mark_done(id) {
                CommandOutcome::Completed(id)
            } else {
                CommandOutcome::Missing(id)
            }
        }
        TaskCommand::Delete { id } => {
            if state.remove(id) {
                CommandOutcome::Deleted(id)
            } else {
                CommandOutcome::Missing(id)
            }
        }
    }
}

pub(crate) fn add(state: &mut TaskList, title: &str) -> Result<Task, TitleValidationError> {
    let trimmed = validate_title(title)?;
    Ok(state.insert_new(trimmed.to_string()))
}

/// Returns `Ok(false)` when no task has `id`.
pub(crate) fn update_title(
    state: &mut TaskList,
    id: TaskId,
    title: &str,
) -> Result<bool, TitleValidationError> {
    let trimmed = validate_title(title)?;
    Ok(state.set_title(id, trimmed))
}
