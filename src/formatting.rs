//! Formatting helper functions for the coursework MCP server
//!
//! This module renders task rows, statistics and single tasks as text.

use crate::board::{Statistics, Task, TaskRow};

/// Format task rows into a display string
///
/// # Arguments
/// * `rows` - Rows in display order
///
/// # Returns
/// One line per task with title, subject, priority, deadline, status and tag
pub fn format_rows(rows: &[TaskRow]) -> String {
    if rows.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", rows.len());
    for row in rows {
        result.push_str(&format!(
            "- {} | {} | {} | {} | {}",
            row.title, row.subject, row.priority, row.deadline_text, row.status
        ));
        if let Some(tag) = row.tag {
            result.push_str(&format!(" | {}", tag));
        }
        result.push('\n');
    }

    result
}

/// Format aggregate statistics into a display string
pub fn format_statistics(stats: &Statistics) -> String {
    let mut result = format!(
        "Total tasks : {}\nDone        : {}\nPending     : {}\n\nTasks per subject:\n",
        stats.total, stats.done, stats.pending
    );
    if stats.per_subject.is_empty() {
        result.push_str("(none)\n");
    }
    for entry in &stats.per_subject {
        result.push_str(&format!("- {} : {}\n", entry.subject, entry.count));
    }
    result
}

/// Format one task's fields, e.g. to pre-fill an edit form
pub fn format_task(task: &Task) -> String {
    format!(
        "Title: {}\nSubject: {}\nPriority: {}\nDeadline: {}\nStatus: {}\n",
        task.title,
        task.subject,
        task.priority,
        task.deadline_text(),
        task.status
    )
}

/// Format tasks ordered by deadline into a display string
pub fn format_by_deadline(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s) by deadline:\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- {} | {} | {} ({}, {})\n",
            task.deadline_text(),
            task.title,
            task.subject,
            task.priority,
            task.status
        ));
    }
    result
}
