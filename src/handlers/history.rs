//! Undo/redo handlers for the coursework MCP server

use crate::CourseworkServerHandler;
use mcp_attr::Result as McpResult;

impl CourseworkServerHandler {
    /// Reverts the most recent add, edit or delete.
    pub async fn handle_undo(&self) -> McpResult<String> {
        let mut board = self.board()?;
        let description = board.log().peek_undo().map(|a| a.describe());

        Ok(match description {
            Some(d) if board.undo() => format!("Undone: {}", d),
            _ => "Nothing to undo".to_string(),
        })
    }

    /// Re-applies the most recently undone change.
    pub async fn handle_redo(&self) -> McpResult<String> {
        let mut board = self.board()?;
        let description = board.log().peek_redo().map(|a| a.describe());

        Ok(match description {
            Some(d) if board.redo() => format!("Redone: {}", d),
            _ => "Nothing to redo".to_string(),
        })
    }
}
