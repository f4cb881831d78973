//! Edit handler for the coursework MCP server

use crate::CourseworkServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl CourseworkServerHandler {
    /// Replaces every field of an existing task, renaming it if `new_title` differs.
    /// A missing task is reported as a no-op rather than an error.
    pub async fn handle_edit_task(
        &self,
        title: String,
        new_title: String,
        subject: String,
        priority: String,
        deadline: String,
        status: String,
    ) -> McpResult<String> {
        let title = validation::normalize_title(&title);
        let new_title = validation::normalize_title(&new_title);
        if new_title.is_empty() {
            bail_public!(_, "Title must not be empty");
        }

        // A missing task is a no-op even when the other fields are malformed
        let fields = validation::parse_priority(&priority)
            .and_then(|p| validation::parse_status(&status).map(|s| (p, s)));

        let mut board = self.board()?;
        if board.find_task(&title).is_none() {
            return Ok(not_found(&title));
        }
        let (priority, status) = match fields {
            Ok(fields) => fields,
            Err(e) => {
                drop(board);
                bail_public!(_, "{}", e);
            }
        };

        match board.edit_task(
            &title,
            &new_title,
            subject.trim(),
            priority,
            &deadline,
            status,
        ) {
            Ok(()) if title == new_title => Ok(format!("Task '{}' updated", title)),
            Ok(()) => Ok(format!(
                "Task '{}' updated and renamed to '{}'",
                title, new_title
            )),
            Err(e) if !e.is_validation() => Ok(not_found(&title)),
            Err(e) => {
                drop(board);
                bail_public!(_, "{}", e);
            }
        }
    }
}

fn not_found(title: &str) -> String {
    format!(
        "Task '{}' not found. Nothing changed. Use list_tasks() to see available tasks.",
        title
    )
}
