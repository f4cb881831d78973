//! List handlers for the coursework MCP server

use crate::CourseworkServerHandler;
use crate::board;
use crate::formatting;
use crate::validation;
use chrono::NaiveDate;
use mcp_attr::{Result as McpResult, bail_public};

impl CourseworkServerHandler {
    /// Handles list/filter operations - filters by status, tags urgency and formats rows.
    pub async fn handle_list_tasks(
        &self,
        status: Option<String>,
        today: Option<String>,
    ) -> McpResult<String> {
        let filter = match validation::parse_status_filter(status.as_deref()) {
            Ok(f) => f,
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        };
        let now = parse_optional_date(today.as_deref())?.unwrap_or_else(board::local_date_today);

        let rows = self.board()?.list_tasks(filter, now);
        Ok(formatting::format_rows(&rows))
    }

    /// Lists tasks in deadline order, optionally limited to an inclusive date range.
    pub async fn handle_list_by_deadline(
        &self,
        from: Option<String>,
        to: Option<String>,
    ) -> McpResult<String> {
        let from = parse_optional_date(from.as_deref())?;
        let to = parse_optional_date(to.as_deref())?;

        let board = self.board()?;
        let tasks = match (from, to) {
            (None, None) => board.tasks_by_deadline(),
            (from, to) => board.tasks_due_between(
                from.unwrap_or(NaiveDate::MIN),
                to.unwrap_or(NaiveDate::MAX),
            ),
        };
        Ok(formatting::format_by_deadline(&tasks))
    }
}

/// Parse an optional DD-MM-YYYY date parameter; empty means absent
fn parse_optional_date(text: Option<&str>) -> McpResult<Option<NaiveDate>> {
    match text {
        None | Some("") => Ok(None),
        Some(s) => match validation::parse_deadline(s) {
            Ok(d) => Ok(Some(d)),
            Err(e) => {
                bail_public!(_, "{}", e);
            }
        },
    }
}
