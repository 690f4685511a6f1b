//! Immutable task list state.
//!
//! # Responsibility
//! - Hold the task collection keyed by id; key order is insertion order.
//! - Track the id high-water mark so deleted ids are never reused.
//! - Produce display snapshots partitioned into active and done tasks.
//!
//! # Invariants
//! - Ids are unique; `next_id` is greater than every id ever stored.
//! - Ids are assigned in increasing order, and seeds must arrive in
//!   ascending id order, so key order is insertion order.
//! - Seed ids stay below `MAX_TASK_ID`, so the id counter starts no higher
//!   than `i64::MAX` and cannot overflow within any reachable number of adds.
//! - Stored titles passed `validate_title` and are kept trimmed.

use crate::model::task::{Task, TaskId};
use crate::model::title::{validate_title, TitleValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Exclusive upper bound for seeded task ids.
pub const MAX_TASK_ID: TaskId = i64::MAX as TaskId;

const DEMO_TASK_TITLES: [&str; 3] = [
    "Create todo-react app",
    "Make a video about it",
    "Create simple todo",
];

/// Errors from seeding a task list with existing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// Two seed tasks share one id.
    DuplicateId(TaskId),
    /// Seed id is not below [`MAX_TASK_ID`].
    IdOutOfRange(TaskId),
    /// Seed id does not follow the previous seed id.
    IdsOutOfOrder { previous: TaskId, id: TaskId },
    /// Seed title fails title validation.
    InvalidTitle {
        id: TaskId,
        source: TitleValidationError,
    },
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
            Self::IdOutOfRange(id) => write!(f, "task id out of range: {id}"),
            Self::IdsOutOfOrder { previous, id } => write!(
                f,
                "task ids must be ascending: {id} follows {previous}"
            ),
            Self::InvalidTitle { id, source } => {
                write!(f, "invalid title for task {id}: {source}")
            }
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Task collection state.
///
/// Cheap to clone for the small lists a UI shows; the reducer clones it to
/// produce the next state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

/// Display snapshot: active tasks first, then done tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListView {
    /// Active tasks in insertion order, followed by done tasks in insertion order.
    pub items: Vec<Task>,
    pub active_count: usize,
    pub done_count: usize,
}

impl TaskListView {
    /// Leading `active_count` items; all items when the count overshoots.
    pub fn active(&self) -> &[Task] {
        self.items.get(..self.active_count).unwrap_or(&self.items)
    }

    /// Items after the active group; empty when the count overshoots.
    pub fn done(&self) -> &[Task] {
        self.items.get(self.active_count..).unwrap_or(&[])
    }

    pub fn ids(&self) -> Vec<TaskId> {
        self.items.iter().map(|task| task.id).collect()
    }
}

impl TaskList {
    /// Creates an empty list. The first assigned id is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a list from existing tasks.
    ///
    /// Seeds are given in insertion order, so their ids must ascend.
    /// Titles are re-validated and stored trimmed. The next assigned id is
    /// one past the last seed id.
    ///
    /// # Errors
    /// - `IdOutOfRange` when an id is not below [`MAX_TASK_ID`].
    /// - `DuplicateId` when two tasks share an id.
    /// - `IdsOutOfOrder` when an id is lower than the one before it.
    /// - `InvalidTitle` when a title is blank or too long.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskListError> {
        let mut list = Self::new();
        let mut previous: Option<TaskId> = None;
        for task in tasks {
            if task.id >= MAX_TASK_ID {
                return Err(TaskListError::IdOutOfRange(task.id));
            }
            if list.tasks.contains_key(&task.id) {
                return Err(TaskListError::DuplicateId(task.id));
            }
            if let Some(previous) = previous.filter(|previous| task.id < *previous) {
                return Err(TaskListError::IdsOutOfOrder {
                    previous,
                    id: task.id,
                });
            }
            previous = Some(task.id);
            let title = validate_title(&task.title)
                .map_err(|source| TaskListError::InvalidTitle {
                    id: task.id,
                    source,
                })?
                .to_string();

            list.next_id = task.id + 1;
            list.tasks.insert(
                task.id,
                Task {
                    id: task.id,
                    title,
                    done: task.done,
                },
            );
        }
        Ok(list)
    }

    /// The three starter tasks a fresh app shows.
    pub fn demo() -> Self {
        let mut list = Self::new();
        for title in DEMO_TASK_TITLES {
            list.insert_new(title.to_string());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Id the next added task will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.values()
    }

    /// Returns an owned copy of all tasks in insertion order.
    pub fn tasks(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|task| task.is_active()).count()
    }

    /// Builds the display snapshot.
    ///
    /// Stable partition: active before done, insertion order kept inside
    /// each group.
    pub fn view(&self) -> TaskListView {
        let (active, done): (Vec<Task>, Vec<Task>) =
            self.iter().cloned().partition(Task::is_active);
        let active_count = active.len();
        let done_count = done.len();
        let mut items = active;
        items.extend(done);

        TaskListView {
            items,
            active_count,
            done_count,
        }
    }

    pub(crate) fn insert_new(&mut self, title: String) -> Task {
        let task = Task::new(self.next_id, title);
        self.next_id += 1;
        self.tasks.insert(task.id, task.clone());
        task
    }

    pub(crate) fn set_title(&mut self, id: TaskId, title: &str) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.title = title.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn mark_done(&mut self, id: TaskId) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.done = true;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }
}
