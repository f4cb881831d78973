//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use coursework_mcp::{Config, CourseworkServerHandler, Priority, Task, TaskBoard};

/// Create a test handler with default configuration
pub fn get_test_handler() -> CourseworkServerHandler {
    CourseworkServerHandler::new(&Config::default())
}

/// Build a date, panicking on invalid input
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Titles of all tasks in board order
pub fn titles(board: &TaskBoard) -> Vec<String> {
    board.tasks().iter().map(|t| t.title.clone()).collect()
}

/// Check the priority/deadline sort invariant on adjacent pairs
pub fn assert_sorted(tasks: &[Task]) {
    for pair in tasks.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.priority.rank() < b.priority.rank()
                || (a.priority == b.priority && a.deadline <= b.deadline),
            "'{}' ({}, {}) is ordered before '{}' ({}, {})",
            a.title,
            a.priority,
            a.deadline,
            b.title,
            b.priority,
            b.deadline
        );
    }
}

/// Add a task to the board with a default subject
pub fn add(board: &mut TaskBoard, title: &str, priority: Priority, deadline: &str) {
    board
        .add_task(title, "Math", priority, deadline)
        .unwrap_or_else(|e| panic!("adding '{}' failed: {}", title, e));
}
