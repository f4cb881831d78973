//! Statistics handler for the coursework MCP server

use crate::CourseworkServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl CourseworkServerHandler {
    /// Summarizes total, done and pending counts plus tasks per subject.
    pub async fn handle_statistics(&self) -> McpResult<String> {
        let stats = self.board()?.statistics();
        Ok(formatting::format_statistics(&stats))
    }
}
