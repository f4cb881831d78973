//! Read-side views over the task store
//!
//! Everything here is a pure function of the store contents and the
//! caller-supplied current date.

use super::task::{Priority, StatusFilter, Task, TaskStatus, UrgencyTag};
use super::task_store::TaskStore;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of days ahead (today included) that a pending task counts as urgent
pub const DEFAULT_URGENT_WINDOW_DAYS: i64 = 3;

/// One row of the task table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub title: String,
    pub subject: String,
    pub priority: Priority,
    /// Deadline as DD-MM-YYYY
    pub deadline_text: String,
    pub status: TaskStatus,
    pub tag: Option<UrgencyTag>,
}

/// Number of tasks filed under one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectCount {
    pub subject: String,
    pub count: usize,
}

/// Aggregate counts over the whole store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    /// Per-subject counts, in order of each subject's first appearance
    pub per_subject: Vec<SubjectCount>,
}

/// Derive the urgency tag of a task relative to `now`
///
/// Completed tasks are never tagged.
pub fn urgency_tag(task: &Task, now: NaiveDate, urgent_window_days: i64) -> Option<UrgencyTag> {
    if task.status == TaskStatus::Done {
        return None;
    }
    let days_left = (task.deadline - now).num_days();
    if days_left < 0 {
        Some(UrgencyTag::Overdue)
    } else if days_left <= urgent_window_days {
        Some(UrgencyTag::Urgent)
    } else {
        None
    }
}

/// Build a table row for a task
pub fn task_row(task: &Task, now: NaiveDate, urgent_window_days: i64) -> TaskRow {
    TaskRow {
        title: task.title.clone(),
        subject: task.subject.clone(),
        priority: task.priority,
        deadline_text: task.deadline_text(),
        status: task.status,
        tag: urgency_tag(task, now, urgent_window_days),
    }
}

/// List tasks matching `filter`, in store order
pub fn list_tasks(
    store: &TaskStore,
    filter: StatusFilter,
    now: NaiveDate,
    urgent_window_days: i64,
) -> Vec<TaskRow> {
    store
        .tasks()
        .iter()
        .filter(|t| filter.matches(t.status))
        .map(|t| task_row(t, now, urgent_window_days))
        .collect()
}

/// Compute aggregate statistics over the store
pub fn statistics(store: &TaskStore) -> Statistics {
    let total = store.len();
    let done = store.tasks().iter().filter(|t| t.is_done()).count();

    let mut per_subject: Vec<SubjectCount> = Vec::new();
    for task in store.tasks() {
        match per_subject.iter_mut().find(|c| c.subject == task.subject) {
            Some(entry) => entry.count += 1,
            None => per_subject.push(SubjectCount {
                subject: task.subject.clone(),
                count: 1,
            }),
        }
    }

    Statistics {
        total,
        done,
        pending: total - done,
        per_subject,
    }
}
