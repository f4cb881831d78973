//! Show handler for the coursework MCP server

use crate::CourseworkServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl CourseworkServerHandler {
    /// Shows every field of one task, ready to be copied into an edit.
    pub async fn handle_show_task(&self, title: String) -> McpResult<String> {
        let title = validation::normalize_title(&title);
        let board = self.board()?;

        match board.find_task(&title) {
            Some(task) => Ok(formatting::format_task(task)),
            None => {
                drop(board);
                bail_public!(
                    _,
                    "Task '{}' does not exist. Use list_tasks() to see available tasks.",
                    title
                );
            }
        }
    }
}
