//! Delete handler for the coursework MCP server

use crate::CourseworkServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl CourseworkServerHandler {
    /// Deletes a task by title. Deleting a missing task is a silent no-op.
    pub async fn handle_delete_task(&self, title: String) -> McpResult<String> {
        let title = validation::normalize_title(&title);
        let mut board = self.board()?;

        Ok(match board.delete_task(&title) {
            Some(task) => format!("Task '{}' deleted", task.title),
            None => format!("Task '{}' not found. Nothing changed.", title),
        })
    }
}
