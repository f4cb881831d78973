//! Coursework task board: domain model and business logic
//!
//! This module contains the core task board data structures.
//! It is split into submodules:
//! - `task`: Task record and its enums (priority, status, filter, urgency tag)
//! - `task_store`: Sorted collection of tasks
//! - `deadline_index`: Binary search tree keyed by deadline
//! - `command_log`: Undo/redo log of invertible actions
//! - `queries`: Filtering, urgency tags and statistics
//! - `task_board`: The board that ties everything together

mod command_log;
mod deadline_index;
mod queries;
mod task;
mod task_board;
mod task_store;

// Re-export all public types
pub use command_log::{Action, CommandLog};
pub use deadline_index::DeadlineIndex;
pub use queries::{
    DEFAULT_URGENT_WINDOW_DAYS, Statistics, SubjectCount, TaskRow, list_tasks, statistics,
    task_row, urgency_tag,
};
pub use task::{
    DEADLINE_FORMAT, Priority, StatusFilter, Task, TaskStatus, UrgencyTag, local_date_today,
};
pub use task_board::{BoardSettings, TaskBoard};
pub use task_store::TaskStore;
