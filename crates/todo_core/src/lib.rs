//! Core task-list logic for the todo app.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod state;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskAction, TaskId};
pub use model::title::{validate_title, TitleValidationError, MAX_TITLE_CHARS};
pub use service::edit_session::{EditError, EditEvent, KeyIntent, TaskDraft, TaskEditor};
pub use service::task_store::TaskStore;
pub use state::command::{reduce, CommandOutcome, TaskCommand, Transition};
pub use state::task_list::{TaskList, TaskListError, TaskListView, MAX_TASK_ID};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
