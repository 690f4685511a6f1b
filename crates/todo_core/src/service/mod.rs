//! Core use-case services.
//!
//! # Responsibility
//! - Wrap task state into the entry points host UIs call.
//! - Keep UI/FFI layers decoupled from state representation.

pub mod edit_session;
pub mod task_store;
