//! Task list state and transitions.
//!
//! # Responsibility
//! - Keep the task collection as a plain value (`TaskList`).
//! - Express mutations as commands applied by a pure transition function.
//!
//! # Invariants
//! - `TaskList` mutators are crate-private; callers outside the crate
//!   change state only through commands.

pub mod command;
pub mod task_list;
