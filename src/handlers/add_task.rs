//! Add handler for the coursework MCP server

use crate::CourseworkServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl CourseworkServerHandler {
    /// Adds a new pending task after validating priority and deadline text.
    pub async fn handle_add_task(
        &self,
        title: String,
        subject: String,
        priority: String,
        deadline: String,
    ) -> McpResult<String> {
        let title = validation::normalize_title(&title);
        if title.is_empty() {
            bail_public!(_, "Title must not be empty");
        }

        let priority = match validation::parse_priority(&priority) {
            Ok(p) => p,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };

        let mut board = self.board()?;
        if let Err(e) = board.add_task(&title, subject.trim(), priority, &deadline) {
            drop(board);
            bail_public!(_, "{}", e);
        }

        Ok(format!("Task '{}' added", title))
    }
}
