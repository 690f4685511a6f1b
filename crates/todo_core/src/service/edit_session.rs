//! Headless input and inline-edit sessions.
//!
//! # Responsibility
//! - Model the "new task" input box and the inline title editor without
//!   any widget toolkit.
//! - Map key presses to submit/cancel intents.
//!
//! # Invariants
//! - A draft is cleared only after the store accepted it.
//! - A failed edit keeps the session open with its text and error.
//! - Done tasks cannot enter edit mode.

use crate::model::task::{Task, TaskAction, TaskId};
use crate::model::title::TitleValidationError;
use crate::service::task_store::TaskStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Intent carried by a key press inside an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Submit,
    Cancel,
}

impl KeyIntent {
    /// Maps a host key name (`"Enter"`, `"Escape"`) to an intent.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Escape" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Text typed into the "new task" input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    text: String,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Adds the draft to `store`.
    ///
    /// # Contract
    /// - Blank drafts are ignored: `Ok(None)`, nothing added.
    /// - Accepted drafts return the created task and clear the input.
    /// - Rejected drafts keep their text.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<Option<Task>, TitleValidationError> {
        if self.text.trim().is_empty() {
            return Ok(None);
        }
        let task = store.add_task(self.text.as_str())?;
        self.text.clear();
        Ok(Some(task))
    }

    /// Submits on Enter; other keys are ignored.
    pub fn handle_key(
        &mut self,
        key: &str,
        store: &mut TaskStore,
    ) -> Result<Option<Task>, TitleValidationError> {
        match KeyIntent::from_key(key) {
            Some(KeyIntent::Submit) => self.submit(store),
            _ => Ok(None),
        }
    }
}

/// Reasons an edit session cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    TaskNotFound(TaskId),
    /// Completed tasks are read-only.
    TaskDone(TaskId),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::TaskDone(id) => write!(f, "task {id} is done and cannot be edited"),
        }
    }
}

impl Error for EditError {}

/// What an editor interaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    Saved(TaskId),
    Cancelled(TaskId),
    /// No session was open, or the key has no meaning here.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    task_id: TaskId,
    text: String,
    error: Option<TitleValidationError>,
}

/// Inline title editor for one task at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEditor {
    session: Option<EditSession>,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.session.as_ref().map(|session| session.task_id)
    }

    pub fn text(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.text.as_str())
    }

    /// Validation error from the last failed commit, if any.
    pub fn error(&self) -> Option<TitleValidationError> {
        self.session.as_ref().and_then(|session| session.error)
    }

    /// Opens an edit session prefilled with the current title.
    ///
    /// Replaces any session already open.
    pub fn begin(&mut self, store: &TaskStore, id: TaskId) -> Result<(), EditError> {
        let task = store.get(id).ok_or(EditError::TaskNotFound(id))?;
        if !task.allows(TaskAction::Edit) {
            return Err(EditError::TaskDone(id));
        }
        self.session = Some(EditSession {
            task_id: id,
            text: task.title.clone(),
            error: None,
        });
        Ok(())
    }

    /// Replaces the edit text and clears a stale validation error.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.text = text.into();
            session.error = None;
        }
    }

    /// Saves the edit text through `store.update_task`.
    ///
    /// On rejection the session stays open and remembers the error.
    pub fn commit(&mut self, store: &mut TaskStore) -> Result<EditEvent, TitleValidationError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(EditEvent::Ignored);
        };

        if let Err(err) = store.update_task(session.task_id, session.text.as_str()) {
            session.error = Some(err);
            return Err(err);
        }

        let task_id = session.task_id;
        self.session = None;
        Ok(EditEvent::Saved(task_id))
    }

    /// Discards the edit text and closes the session.
    pub fn cancel(&mut self) -> EditEvent {
        match self.session.take() {
            Some(session) => EditEvent::Cancelled(session.task_id),
            None => EditEvent::Ignored,
        }
    }

    /// Enter commits, Escape cancels, anything else is ignored.
    pub fn handle_key(
        &mut self,
        key: &str,
        store: &mut TaskStore,
    ) -> Result<EditEvent, TitleValidationError> {
        match KeyIntent::from_key(key) {
            Some(KeyIntent::Submit) => self.commit(store),
            Some(KeyIntent::Cancel) => Ok(self.cancel()),
            None => Ok(EditEvent::Ignored),
        }
    }
}
