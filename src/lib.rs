//! Coursework MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for tracking
//! academic tasks: each task has a title, subject, priority, deadline and
//! status. Tasks are kept in priority/deadline order, can be filtered by
//! status, summarized with statistics, and every change can be undone and
//! redone.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **MCP Layer**: `CourseworkServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `board` module - Task store, deadline index, undo/redo log
//!
//! State is held in memory only; nothing is written to disk.
//!
//! # Example
//!
//! ```
//! use coursework_mcp::{Priority, StatusFilter, TaskBoard};
//! use chrono::NaiveDate;
//!
//! let mut board = TaskBoard::new();
//! board.add_task("Essay", "Math", Priority::High, "15-01-2024").unwrap();
//! board.add_task("Lab", "Physics", Priority::Low, "10-01-2024").unwrap();
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let rows = board.list_tasks(StatusFilter::All, now);
//! assert_eq!(rows[0].title, "Essay");
//!
//! board.undo();
//! assert_eq!(board.tasks().len(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod validation;

use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use board::{
    Action, BoardSettings, Priority, Statistics, StatusFilter, Task, TaskBoard, TaskRow,
    TaskStatus, UrgencyTag,
};
pub use config::Config;
pub use error::BoardError;

/// MCP Server handler for coursework task management
///
/// Owns a single [`TaskBoard`]. Tools take `&self`, so the board sits behind a
/// mutex; every tool call holds the lock for exactly one board operation.
pub struct CourseworkServerHandler {
    pub(crate) board: Mutex<TaskBoard>,
}

impl CourseworkServerHandler {
    /// Create a new handler with an empty board configured from `config`
    ///
    /// # Example
    /// ```
    /// # use coursework_mcp::{Config, CourseworkServerHandler};
    /// let handler = CourseworkServerHandler::new(&Config::default());
    /// ```
    pub fn new(config: &Config) -> Self {
        Self::with_board(TaskBoard::with_settings(config.board.clone()))
    }

    /// Create a new handler around an existing board
    pub fn with_board(board: TaskBoard) -> Self {
        Self {
            board: Mutex::new(board),
        }
    }

    /// Lock the board for one operation
    pub(crate) fn board(&self) -> McpResult<MutexGuard<'_, TaskBoard>> {
        match self.board.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => {
                bail!("Task board is unavailable: a previous operation panicked");
            }
        }
    }
}

/// Coursework task manager for students.
///
/// Track assignments per subject with a priority (High/Medium/Low) and a deadline (DD-MM-YYYY).
/// Tasks are always listed High before Medium before Low, earliest deadline first within a priority.
///
/// Key concepts:
/// - **Title**: identifies a task; titles are unique unless the server allows duplicates
/// - **Status**: Pending (new tasks) or Done
/// - **Tags**: pending tasks past their deadline are Overdue; due within the urgent window (3 days by default) are Urgent
/// - **Undo/Redo**: every add, edit and delete can be undone; a new change clears redo
#[mcp_server]
impl McpServer for CourseworkServerHandler {
    /// **Add**: Create a new pending task.
    /// **Format**: priority is High/Medium/Low, deadline is DD-MM-YYYY (e.g., "15-01-2024").
    #[tool]
    async fn add_task(
        &self,
        /// Title: unique name of the task (e.g., "Calculus essay")
        title: String,
        /// Subject: course the task belongs to (e.g., "Math")
        subject: String,
        /// Priority: High/Medium/Low
        priority: String,
        /// Deadline: DD-MM-YYYY
        deadline: String,
    ) -> McpResult<String> {
        self.handle_add_task(title, subject, priority, deadline).await
    }

    /// **Edit**: Replace all fields of a task. Use show_task first to get current values.
    /// **Rename**: pass a different new_title; undo restores the old title.
    #[tool]
    async fn edit_task(
        &self,
        /// Title of the task to edit
        title: String,
        /// New title (same as title to keep it)
        new_title: String,
        /// Subject
        subject: String,
        /// Priority: High/Medium/Low
        priority: String,
        /// Deadline: DD-MM-YYYY
        deadline: String,
        /// Status: Pending/Done
        status: String,
    ) -> McpResult<String> {
        self.handle_edit_task(title, new_title, subject, priority, deadline, status)
            .await
    }

    /// **Delete**: Remove a task by title. Can be undone.
    #[tool]
    async fn delete_task(
        &self,
        /// Title of the task to delete
        title: String,
    ) -> McpResult<String> {
        self.handle_delete_task(title).await
    }

    /// **Undo**: Revert the most recent add, edit or delete.
    #[tool]
    async fn undo(&self) -> McpResult<String> {
        self.handle_undo().await
    }

    /// **Redo**: Re-apply the most recently undone change. Cleared by any new change.
    #[tool]
    async fn redo(&self) -> McpResult<String> {
        self.handle_redo().await
    }

    /// **List**: Show tasks in priority/deadline order with Overdue/Urgent tags.
    /// **Filter**: status All (default), Pending or Done.
    #[tool]
    async fn list_tasks(
        &self,
        /// Status filter: All/Pending/Done. Empty=All.
        status: Option<String>,
        /// Reference date for tags, DD-MM-YYYY. Empty=today.
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_tasks(status, today).await
    }

    /// **By deadline**: Show tasks ordered by deadline only, optionally within a date range.
    #[tool]
    async fn list_by_deadline(
        &self,
        /// First deadline to include, DD-MM-YYYY (optional)
        from: Option<String>,
        /// Last deadline to include, DD-MM-YYYY (optional)
        to: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_by_deadline(from, to).await
    }

    /// **Show**: Show every field of one task.
    #[tool]
    async fn show_task(
        &self,
        /// Title of the task
        title: String,
    ) -> McpResult<String> {
        self.handle_show_task(title).await
    }

    /// **Statistics**: Total, done and pending counts, plus tasks per subject.
    #[tool]
    async fn statistics(&self) -> McpResult<String> {
        self.handle_statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_handler() -> CourseworkServerHandler {
        CourseworkServerHandler::new(&Config::default())
    }

    async fn add(handler: &CourseworkServerHandler, title: &str, priority: &str, deadline: &str) {
        handler
            .handle_add_task(
                title.to_string(),
                "Math".to_string(),
                priority.to_string(),
                deadline.to_string(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_task_via_handler() {
        let handler = get_test_handler();
        let result = handler
            .handle_add_task(
                "  Essay ".to_string(),
                "Math".to_string(),
                "High".to_string(),
                "15-01-2024".to_string(),
            )
            .await;
        assert_eq!(result.unwrap(), "Task 'Essay' added");

        let board = handler.board.lock().unwrap();
        assert!(board.find_task("Essay").is_some());
    }

    #[tokio::test]
    async fn test_add_task_invalid_priority() {
        let handler = get_test_handler();
        let result = handler
            .handle_add_task(
                "Essay".to_string(),
                "Math".to_string(),
                "Critical".to_string(),
                "15-01-2024".to_string(),
            )
            .await;
        assert!(result.is_err());
        assert!(handler.board.lock().unwrap().tasks().is_empty());
    }

    #[tokio::test]
    async fn test_add_task_invalid_deadline() {
        let handler = get_test_handler();
        let result = handler
            .handle_add_task(
                "Essay".to_string(),
                "Math".to_string(),
                "High".to_string(),
                "2024-01-15".to_string(),
            )
            .await;
        assert!(result.is_err());
        assert!(!handler.board.lock().unwrap().can_undo());
    }

    #[tokio::test]
    async fn test_add_task_empty_title() {
        let handler = get_test_handler();
        let result = handler
            .handle_add_task(
                "   ".to_string(),
                "Math".to_string(),
                "High".to_string(),
                "15-01-2024".to_string(),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_edit_missing_task_is_noop() {
        let handler = get_test_handler();
        add(&handler, "Essay", "High", "15-01-2024").await;
        let before = handler.board.lock().unwrap().clone();

        let result = handler
            .handle_edit_task(
                "Ghost".to_string(),
                "Ghost".to_string(),
                "Math".to_string(),
                "High".to_string(),
                "15-01-2024".to_string(),
                "Done".to_string(),
            )
            .await
            .unwrap();
        assert!(result.contains("not found"));
        assert_eq!(*handler.board.lock().unwrap(), before);
    }

    #[tokio::test]
    async fn test_edit_task_invalid_status() {
        let handler = get_test_handler();
        add(&handler, "Essay", "High", "15-01-2024").await;

        let result = handler
            .handle_edit_task(
                "Essay".to_string(),
                "Essay".to_string(),
                "Math".to_string(),
                "High".to_string(),
                "15-01-2024".to_string(),
                "Finished".to_string(),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_edit_task_rename_message() {
        let handler = get_test_handler();
        add(&handler, "Essay", "High", "15-01-2024").await;

        let result = handler
            .handle_edit_task(
                "Essay".to_string(),
                "Report".to_string(),
                "Math".to_string(),
                "High".to_string(),
                "15-01-2024".to_string(),
                "Pending".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(result, "Task 'Essay' updated and renamed to 'Report'");
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_noop() {
        let handler = get_test_handler();
        let result = handler.handle_delete_task("Ghost".to_string()).await.unwrap();
        assert!(result.contains("Nothing changed"));
        assert!(!handler.board.lock().unwrap().can_undo());
    }

    #[tokio::test]
    async fn test_undo_redo_messages() {
        let handler = get_test_handler();
        assert_eq!(handler.handle_undo().await.unwrap(), "Nothing to undo");
        assert_eq!(handler.handle_redo().await.unwrap(), "Nothing to redo");

        add(&handler, "Essay", "High", "15-01-2024").await;
        assert_eq!(handler.handle_undo().await.unwrap(), "Undone: add 'Essay'");
        assert_eq!(handler.handle_redo().await.unwrap(), "Redone: add 'Essay'");
    }

    #[tokio::test]
    async fn test_list_tasks_with_reference_date() {
        let handler = get_test_handler();
        add(&handler, "Essay", "High", "09-01-2024").await;
        add(&handler, "Lab", "Low", "12-01-2024").await;

        let list = handler
            .handle_list_tasks(None, Some("10-01-2024".to_string()))
            .await
            .unwrap();
        assert!(list.contains("- Essay | Math | High | 09-01-2024 | Pending | Overdue"));
        assert!(list.contains("- Lab | Math | Low | 12-01-2024 | Pending | Urgent"));
        assert!(list.find("Essay").unwrap() < list.find("Lab").unwrap());
    }

    #[tokio::test]
    async fn test_list_tasks_invalid_filter() {
        let handler = get_test_handler();
        let result = handler
            .handle_list_tasks(Some("Belum".to_string()), None)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_tasks_invalid_reference_date() {
        let handler = get_test_handler();
        let result = handler
            .handle_list_tasks(None, Some("2024-01-10".to_string()))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_by_deadline_range() {
        let handler = get_test_handler();
        add(&handler, "Late", "High", "20-01-2024").await;
        add(&handler, "Early", "Low", "05-01-2024").await;
        add(&handler, "Middle", "Medium", "10-01-2024").await;

        let all = handler.handle_list_by_deadline(None, None).await.unwrap();
        let early = all.find("Early").unwrap();
        let middle = all.find("Middle").unwrap();
        let late = all.find("Late").unwrap();
        assert!(early < middle && middle < late);

        let upto = handler
            .handle_list_by_deadline(None, Some("10-01-2024".to_string()))
            .await
            .unwrap();
        assert!(upto.contains("Early"));
        assert!(upto.contains("Middle"));
        assert!(!upto.contains("Late"));
    }

    #[tokio::test]
    async fn test_show_task() {
        let handler = get_test_handler();
        add(&handler, "Essay", "High", "15-01-2024").await;

        let shown = handler.handle_show_task("Essay".to_string()).await.unwrap();
        assert!(shown.contains("Deadline: 15-01-2024"));
        assert!(handler.handle_show_task("Ghost".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn test_statistics_via_handler() {
        let handler = get_test_handler();
        add(&handler, "Essay", "High", "15-01-2024").await;
        add(&handler, "Quiz", "Low", "16-01-2024").await;

        let stats = handler.handle_statistics().await.unwrap();
        assert!(stats.contains("Total tasks : 2"));
        assert!(stats.contains("- Math : 2"));
    }
}
