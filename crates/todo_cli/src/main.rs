//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todo_core::TaskStore;

fn main() {
    println!("todo_core ping={}", todo_core::ping());
    println!("todo_core version={}", todo_core::core_version());

    let mut store = TaskStore::with_demo_tasks();
    store.complete_task(0);
    let view = store.snapshot();
    println!("active={} done={}", view.active_count, view.done_count);
    for task in &view.items {
        let marker = if task.done { "x" } else { " " };
        println!("[{marker}] {} {}", task.id, task.title);
    }
}
