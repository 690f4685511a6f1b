//! Task domain model.
//!
//! # Responsibility
//! - Define the task record rendered by host UIs.
//! - Describe which row actions a task offers in its current state.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes.
//! - `done` starts as `false` and only the store flips it.

use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
///
/// Monotonic within one store; a deleted id is never handed out again.
pub type TaskId = u64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed display title.
    pub title: String,
    pub done: bool,
}

/// Row-level action a host UI can offer for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Open inline title editing.
    Edit,
    /// Mark the task done.
    Complete,
    /// Remove the task permanently.
    Delete,
}

impl Task {
    /// Creates an active task.
    ///
    /// Does not validate `title`; write paths go through
    /// [`crate::model::title::validate_title`] first.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Returns whether this task still needs doing.
    pub fn is_active(&self) -> bool {
        !self.done
    }

    /// Actions offered for this task.
    ///
    /// Active tasks can be edited or completed. Done tasks can only be
    /// deleted.
    pub fn available_actions(&self) -> &'static [TaskAction] {
        if self.done {
            &[TaskAction::Delete]
        } else {
            &[TaskAction::Edit, TaskAction::Complete]
        }
    }

    pub fn allows(&self, action: TaskAction) -> bool {
        self.available_actions().contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskAction};

    #[test]
    fn new_task_is_active() {
        let task = Task::new(7, "Buy milk");
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert!(task.is_active());
    }

    #[test]
    fn done_task_only_offers_delete() {
        let mut task = Task::new(0, "ship");
        assert_eq!(
            task.available_actions(),
            &[TaskAction::Edit, TaskAction::Complete]
        );

        task.done = true;
        assert_eq!(task.available_actions(), &[TaskAction::Delete]);
        assert!(!task.allows(TaskAction::Edit));
    }
}
