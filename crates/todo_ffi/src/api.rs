//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose task-list operations to Dart via FRB as sync calls.
//! - Own the process-wide `TaskStore` for the UI session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation returns the fresh display snapshot.
//! - Unknown or negative ids are no-ops, never errors.

use log::warn;
use std::sync::{Mutex, OnceLock, PoisonError};
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    validate_title, CommandOutcome, Task, TaskAction, TaskCommand, TaskId, TaskListView,
    TaskStore,
};

const SEED_DEMO_ENV_VAR: &str = "TODO_SEED_DEMO";
static TASK_STORE: OnceLock<Mutex<TaskStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub done: bool,
    /// Row actions offered (`edit|complete|delete`).
    pub actions: Vec<String>,
}

/// Display snapshot: active tasks first, then done tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub items: Vec<TaskItem>,
    /// Shown as the "Active tasks: N" header.
    pub active_count: u32,
    pub done_count: u32,
}

/// Result envelope for one task mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// `false` only when title input was rejected.
    pub ok: bool,
    /// Target or created task id.
    pub task_id: Option<i64>,
    /// User-facing message; validation text on rejection.
    pub message: String,
    /// Snapshot after the call.
    pub snapshot: TaskListResponse,
}

/// Returns the current display snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> TaskListResponse {
    with_store(|store| to_list_response(&store.snapshot()))
}

/// Adds a task from the "new task" input.
///
/// # FFI contract
/// - Title is trimmed; blank or over-long input returns `ok=false` with the
///   validation message and adds nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String) -> TaskActionResponse {
    run_command(TaskCommand::Add { title })
}

/// Saves an inline title edit.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update(id: i64, title: String) -> TaskActionResponse {
    match to_task_id(id) {
        Some(id) => run_command(TaskCommand::UpdateTitle { id, title }),
        None => missing_response(id),
    }
}

/// Marks a task done.
#[flutter_rust_bridge::frb(sync)]
pub fn task_complete(id: i64) -> TaskActionResponse {
    match to_task_id(id) {
        Some(id) => run_command(TaskCommand::Complete { id }),
        None => missing_response(id),
    }
}

/// Deletes a task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: i64) -> TaskActionResponse {
    match to_task_id(id) {
        Some(id) => run_command(TaskCommand::Delete { id }),
        None => missing_response(id),
    }
}

/// Replaces the session store with an empty or demo-seeded one.
#[flutter_rust_bridge::frb(sync)]
pub fn task_reset(seed_demo: bool) -> TaskListResponse {
    with_store(|store| {
        *store = initial_store(seed_demo);
        to_list_response(&store.snapshot())
    })
}

/// Validates edit text without touching the store.
///
/// Returns empty string when valid, otherwise the user-facing message.
#[flutter_rust_bridge::frb(sync)]
pub fn task_validate_title(text: String) -> String {
    match validate_title(text.as_str()) {
        Ok(_) => String::new(),
        Err(err) => err.user_message().to_string(),
    }
}

fn run_command(command: TaskCommand) -> TaskActionResponse {
    with_store(|store| {
        let outcome = store.apply(command);
        let snapshot = to_list_response(&store.snapshot());
        let (ok, task_id, message) = match outcome {
            CommandOutcome::Added(task) => (true, Some(task.id), "Task added.".to_string()),
            CommandOutcome::Updated(id) => (true, Some(id), "Task updated.".to_string()),
            CommandOutcome::Completed(id) => (true, Some(id), "Task completed.".to_string()),
            CommandOutcome::Deleted(id) => (true, Some(id), "Task deleted.".to_string()),
            CommandOutcome::Rejected(err) => (false, None, err.user_message().to_string()),
            CommandOutcome::Missing(id) => (true, Some(id), missing_message()),
        };
        TaskActionResponse {
            ok,
            task_id: task_id.map(to_ffi_id),
            message,
            snapshot,
        }
    })
}

fn missing_response(id: i64) -> TaskActionResponse {
    TaskActionResponse {
        ok: true,
        task_id: Some(id),
        message: missing_message(),
        snapshot: task_list(),
    }
}

fn missing_message() -> String {
    "Task not found; nothing changed.".to_string()
}

fn with_store<T>(f: impl FnOnce(&mut TaskStore) -> T) -> T {
    let store = TASK_STORE.get_or_init(|| Mutex::new(initial_store(seed_demo_from_env())));
    // A panic inside a store call cannot leave a half-applied command, so the
    // poisoned value is still consistent.
    let mut guard = store.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        warn!("event=store_lock module=ffi status=recovered_poison");
        poisoned.into_inner()
    });
    f(&mut guard)
}

fn initial_store(seed_demo: bool) -> TaskStore {
    if seed_demo {
        TaskStore::with_demo_tasks()
    } else {
        TaskStore::new()
    }
}

fn seed_demo_from_env() -> bool {
    std::env::var(SEED_DEMO_ENV_VAR)
        .map(|raw| parse_seed_flag(&raw))
        .unwrap_or(false)
}

fn parse_seed_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn to_task_id(id: i64) -> Option<TaskId> {
    TaskId::try_from(id).ok()
}

fn to_ffi_id(id: TaskId) -> i64 {
    i64::try_from(id).unwrap_or(i64::MAX)
}

fn to_list_response(view: &TaskListView) -> TaskListResponse {
    TaskListResponse {
        items: view.items.iter().map(to_task_item).collect(),
        active_count: count_to_u32(view.active_count),
        done_count: count_to_u32(view.done_count),
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: to_ffi_id(task.id),
        title: task.title.clone(),
        done: task.done,
        actions: task
            .available_actions()
            .iter()
            .map(|action| task_action_label(*action).to_string())
            .collect(),
    }
}

fn task_action_label(action: TaskAction) -> &'static str {
    match action {
        TaskAction::Edit => "edit",
        TaskAction::Complete => "complete",
        TaskAction::Delete => "delete",
    }
}

fn count_to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
