use super::command_log::{Action, CommandLog};
use super::deadline_index::DeadlineIndex;
use super::queries::{self, DEFAULT_URGENT_WINDOW_DAYS, Statistics, TaskRow};
use super::task::{Priority, StatusFilter, Task, TaskStatus};
use super::task_store::TaskStore;
use crate::error::BoardError;
use crate::validation;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

/// Tunable behaviour of a task board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSettings {
    /// Pending tasks due within this many days (today included) are tagged Urgent
    pub urgent_window_days: i64,
    /// Reject adds and renames that would duplicate an existing title
    pub unique_titles: bool,
    /// Maximum number of undoable actions kept (None = unlimited)
    pub history_limit: Option<usize>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            urgent_window_days: DEFAULT_URGENT_WINDOW_DAYS,
            unique_titles: true,
            history_limit: None,
        }
    }
}

/// The task board: store, deadline index and undo/redo log in one value
///
/// A board is owned by its caller and passed wherever it is needed; there is
/// no process-wide state, so independent boards can coexist.
///
/// Every successful mutation keeps three things in step: the store is
/// re-sorted, the deadline index reflects the store, and exactly one
/// [`Action`] is recorded (which discards any pending redo). A rejected
/// mutation changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    store: TaskStore,
    index: DeadlineIndex,
    log: CommandLog,
    settings: BoardSettings,
}

impl TaskBoard {
    /// Create a new empty board with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty board with the given settings
    pub fn with_settings(settings: BoardSettings) -> Self {
        Self {
            log: CommandLog::with_history_limit(settings.history_limit),
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn index(&self) -> &DeadlineIndex {
        &self.index
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// All tasks in priority/deadline order
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Find a task by title
    pub fn find_task(&self, title: &str) -> Option<&Task> {
        self.store.find(title)
    }

    /// Add a new pending task
    ///
    /// # Errors
    /// - [`BoardError::InvalidDeadline`] if `deadline_text` is not DD-MM-YYYY
    /// - [`BoardError::DuplicateTitle`] if unique titles are enforced and the
    ///   title is taken
    pub fn add_task(
        &mut self,
        title: &str,
        subject: &str,
        priority: Priority,
        deadline_text: &str,
    ) -> Result<(), BoardError> {
        let deadline = validation::parse_deadline(deadline_text)?;
        if self.settings.unique_titles && self.store.contains(title) {
            debug!("Rejected add of duplicate title '{}'", title);
            return Err(BoardError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        let task = Task::new(title, subject, priority, deadline);
        self.store.add(task.clone());
        self.rebuild_index();
        self.log.record(Action::Add(task));

        info!("Added task '{}' ({}, due {})", title, priority, deadline);
        Ok(())
    }

    /// Replace every field of an existing task, including its title
    ///
    /// # Errors
    /// - [`BoardError::NotFound`] if no task is titled `title`
    /// - [`BoardError::InvalidDeadline`] if `deadline_text` is not DD-MM-YYYY
    /// - [`BoardError::DuplicateTitle`] if unique titles are enforced and
    ///   `new_title` belongs to a different task
    pub fn edit_task(
        &mut self,
        title: &str,
        new_title: &str,
        subject: &str,
        priority: Priority,
        deadline_text: &str,
        status: TaskStatus,
    ) -> Result<(), BoardError> {
        let Some(pos) = self.store.position(title) else {
            debug!("Edit target '{}' not found", title);
            return Err(BoardError::NotFound {
                title: title.to_string(),
            });
        };
        let deadline = validation::parse_deadline(deadline_text)?;
        if self.settings.unique_titles && new_title != title && self.store.contains(new_title) {
            debug!("Rejected rename of '{}' onto existing '{}'", title, new_title);
            return Err(BoardError::DuplicateTitle {
                title: new_title.to_string(),
            });
        }

        let after = Task {
            title: new_title.to_string(),
            subject: subject.to_string(),
            priority,
            deadline,
            status,
        };
        let before = self.store.replace(pos, after.clone());
        self.store.sort();
        self.rebuild_index();
        self.log.record(Action::Edit { before, after });

        info!("Edited task '{}' -> '{}'", title, new_title);
        Ok(())
    }

    /// Delete a task by title
    ///
    /// Returns the removed task, or `None` (changing nothing) if absent.
    pub fn delete_task(&mut self, title: &str) -> Option<Task> {
        let Some(removed) = self.store.remove(title) else {
            debug!("Delete target '{}' not found", title);
            return None;
        };
        self.rebuild_index();
        self.log.record(Action::Delete(removed.clone()));

        info!("Deleted task '{}'", title);
        Some(removed)
    }

    /// Revert the most recent mutation
    ///
    /// Returns `false` (changing nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.log.undo(&mut self.store) else {
            debug!("Nothing to undo");
            return false;
        };
        info!("Undid {}", action.describe());
        self.rebuild_index();
        true
    }

    /// Re-apply the most recently undone mutation
    ///
    /// Returns `false` (changing nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.log.redo(&mut self.store) else {
            debug!("Nothing to redo");
            return false;
        };
        info!("Redid {}", action.describe());
        self.rebuild_index();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    /// Table rows for tasks matching `filter`, tagged relative to `now`
    pub fn list_tasks(&self, filter: StatusFilter, now: NaiveDate) -> Vec<TaskRow> {
        queries::list_tasks(&self.store, filter, now, self.settings.urgent_window_days)
    }

    /// Aggregate counts over all tasks
    pub fn statistics(&self) -> Statistics {
        queries::statistics(&self.store)
    }

    /// All tasks ordered by deadline only
    pub fn tasks_by_deadline(&self) -> Vec<&Task> {
        self.index.in_order()
    }

    /// Tasks due between `from` and `to`, both inclusive, by deadline
    pub fn tasks_due_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Task> {
        self.index.range(from, to)
    }

    /// Task with the nearest deadline, done or not
    pub fn next_deadline(&self) -> Option<&Task> {
        self.index.earliest()
    }

    /// Equal deadlines sit in store order, so the index depends only on contents
    fn rebuild_index(&mut self) {
        self.index.rebuild(self.store.tasks());
    }
}
