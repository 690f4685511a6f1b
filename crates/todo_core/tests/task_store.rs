use std::collections::BTreeSet;
use todo_core::{
    Task, TaskListError, TaskStore, TitleValidationError, MAX_TASK_ID, MAX_TITLE_CHARS,
};

fn task(id: u64, title: &str, done: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        done,
    }
}

#[test]
fn first_adds_get_ids_zero_and_one() {
    let mut store = TaskStore::new();

    let milk = store.add_task("Buy milk").unwrap();
    assert_eq!(milk, task(0, "Buy milk", false));

    let dog = store.add_task("Walk dog").unwrap();
    assert_eq!(dog.id, 1);
    assert_eq!(dog.title, "Walk dog");
    assert!(!dog.done);
}

#[test]
fn add_sequence_yields_strictly_increasing_ids() {
    let mut store = TaskStore::new();
    let mut previous = None;
    let mut created_ids = BTreeSet::new();
    for idx in 0..25 {
        let created = store.add_task(format!("task {idx}")).unwrap();
        created_ids.insert(created.id);
        if let Some(prev) = previous {
            assert!(created.id > prev);
        }
        previous = Some(created.id);
        if idx % 3 == 0 {
            store.delete_task(created.id);
        }
    }

    assert_eq!(created_ids.len(), 25);
}

#[test]
fn add_then_delete_restores_previous_collection() {
    let mut store = TaskStore::with_demo_tasks();
    let before = store.tasks();

    let created = store.add_task("temporary").unwrap();
    store.delete_task(created.id);

    assert_eq!(store.tasks(), before);
}

#[test]
fn deleted_newest_id_is_not_reused() {
    let mut store = TaskStore::new();
    store.add_task("a").unwrap();
    let newest = store.add_task("b").unwrap();
    store.delete_task(newest.id);

    let next = store.add_task("c").unwrap();
    assert_eq!(next.id, 2);
}

#[test]
fn duplicate_titles_create_distinct_tasks() {
    let mut store = TaskStore::new();
    let first = store.add_task("same").unwrap();
    let second = store.add_task("same").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn repeated_update_is_idempotent() {
    let mut store = TaskStore::with_demo_tasks();
    store.update_task(1, "  Record the video  ").unwrap();
    let after_first = store.tasks();

    store.update_task(1, "  Record the video  ").unwrap();
    assert_eq!(store.tasks(), after_first);
    assert_eq!(store.get(1).unwrap().title, "Record the video");
}

#[test]
fn update_keeps_id_and_done_flag() {
    let mut store = TaskStore::with_tasks([task(4, "old", true)]).unwrap();
    store.update_task(4, "new").unwrap();
    assert_eq!(store.get(4), Some(&task(4, "new", true)));
}

#[test]
fn blank_update_never_changes_title() {
    let mut store = TaskStore::with_tasks([task(0, "X", false)]).unwrap();

    for blank in ["", "   ", "\t\n"] {
        let err = store.update_task(0, blank).unwrap_err();
        assert_eq!(err, TitleValidationError::Empty);
        assert_eq!(err.user_message(), "you cannot leave an empty field.");
    }
    assert_eq!(store.get(0).unwrap().title, "X");
}

#[test]
fn update_length_limit_is_inclusive_at_one_hundred() {
    let mut store = TaskStore::with_tasks([task(0, "X", false)]).unwrap();

    let too_long = "a".repeat(MAX_TITLE_CHARS + 1);
    let err = store.update_task(0, too_long).unwrap_err();
    assert_eq!(err.user_message(), "task is too long.");
    assert_eq!(store.get(0).unwrap().title, "X");

    let exact = "b".repeat(MAX_TITLE_CHARS);
    store.update_task(0, exact.clone()).unwrap();
    assert_eq!(store.get(0).unwrap().title, exact);
}

#[test]
fn update_unknown_id_is_silent_noop() {
    let mut store = TaskStore::with_tasks([task(0, "X", false)]).unwrap();
    store.update_task(9, "Y").unwrap();
    assert_eq!(store.tasks(), vec![task(0, "X", false)]);
}

#[test]
fn complete_is_idempotent_and_never_reactivates() {
    let mut store = TaskStore::with_demo_tasks();
    store.complete_task(2);
    let once = store.tasks();
    store.complete_task(2);

    assert_eq!(store.tasks(), once);
    assert!(store.get(2).unwrap().done);
    assert_eq!(store.active_count(), 2);
}

#[test]
fn complete_unknown_id_is_noop() {
    let mut store = TaskStore::with_demo_tasks();
    let before = store.tasks();
    store.complete_task(77);
    assert_eq!(store.tasks(), before);
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let mut store = TaskStore::with_tasks([task(0, "X", false)]).unwrap();
    store.delete_task(5);
    assert_eq!(store.tasks(), vec![task(0, "X", false)]);
}

#[test]
fn deleting_twice_is_safe() {
    let mut store = TaskStore::with_demo_tasks();
    store.delete_task(0);
    store.delete_task(0);
    assert_eq!(store.len(), 2);
    assert!(store.get(0).is_none());
}

#[test]
fn snapshot_lists_active_before_done_with_active_count() {
    let store = TaskStore::with_tasks([
        task(0, "first", true),
        task(1, "second", false),
        task(2, "third", false),
    ])
    .unwrap();

    let view = store.snapshot();
    assert_eq!(view.ids(), vec![1, 2, 0]);
    assert_eq!(view.active_count, 2);
    assert_eq!(view.done_count, 1);
}

#[test]
fn snapshot_keeps_insertion_order_inside_partitions() {
    let mut store = TaskStore::new();
    for title in ["a", "b", "c", "d"] {
        store.add_task(title).unwrap();
    }
    store.complete_task(2);
    store.complete_task(0);

    assert_eq!(store.snapshot().ids(), vec![1, 3, 0, 2]);
}

#[test]
fn seeding_rejects_duplicate_ids() {
    let err = TaskStore::with_tasks([task(1, "a", false), task(1, "b", false)]).unwrap_err();
    assert!(err.to_string().contains("duplicate task id: 1"));
}

#[test]
fn seeding_near_id_limit_is_rejected_instead_of_overflowing_on_add() {
    let err = TaskStore::with_tasks([task(u64::MAX - 1, "a", false)]).unwrap_err();
    assert_eq!(err, TaskListError::IdOutOfRange(u64::MAX - 1));

    let mut store = TaskStore::with_tasks([task(MAX_TASK_ID - 1, "a", false)]).unwrap();
    let added = store.add_task("b").unwrap();
    assert_eq!(added.id, MAX_TASK_ID);
}

#[test]
fn seeding_requires_ascending_ids_to_keep_insertion_order() {
    let err = TaskStore::with_tasks([task(9, "first", false), task(4, "second", false)])
        .unwrap_err();
    assert_eq!(err, TaskListError::IdsOutOfOrder { previous: 9, id: 4 });

    let store =
        TaskStore::with_tasks([task(4, "first", false), task(9, "second", false)]).unwrap();
    assert_eq!(store.snapshot().ids(), vec![4, 9]);
}
