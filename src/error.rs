//! Error types for the coursework task board

use thiserror::Error;

/// Errors returned by task board operations
///
/// A returned error always means the operation was rejected as a whole;
/// the board is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid deadline '{input}'. Use DD-MM-YYYY (e.g., '15-01-2024')")]
    InvalidDeadline { input: String },

    #[error("Invalid priority '{input}'. Valid priorities: High, Medium, Low")]
    InvalidPriority { input: String },

    #[error("Invalid status '{input}'. Valid statuses: Pending, Done")]
    InvalidStatus { input: String },

    #[error("Invalid status filter '{input}'. Valid filters: All, Pending, Done")]
    InvalidStatusFilter { input: String },

    #[error("A task titled '{title}' already exists. Please use a unique title.")]
    DuplicateTitle { title: String },

    #[error("Task '{title}' does not exist")]
    NotFound { title: String },
}

impl BoardError {
    /// Whether this error rejects malformed or conflicting input
    /// (as opposed to targeting a task that does not exist)
    pub fn is_validation(&self) -> bool {
        !matches!(self, BoardError::NotFound { .. })
    }
}
