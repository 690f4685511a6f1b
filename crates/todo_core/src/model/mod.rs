//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, reducer and FFI.
//! - Own the title validation rules used by every write path.
//!
//! # Invariants
//! - Every task is identified by a store-assigned `TaskId`.
//! - Stored titles are trimmed, non-empty and within `MAX_TITLE_CHARS`.

pub mod task;
pub mod title;
