//! Validation helper functions for the coursework task board
//!
//! This module turns the plain strings coming from the outer surface into
//! typed values: deadline text, priorities, statuses and status filters.

use crate::board::{DEADLINE_FORMAT, Priority, StatusFilter, TaskStatus};
use crate::error::BoardError;
use chrono::NaiveDate;

/// Parse deadline text in DD-MM-YYYY format
///
/// The shape is checked strictly (two-digit day, two-digit month,
/// four-digit year) before chrono validates the calendar date itself,
/// so "1-1-2024" and "2024-01-01" are both rejected.
///
/// # Examples
/// ```
/// # use coursework_mcp::validation::parse_deadline;
/// let date = parse_deadline("15-01-2024").unwrap();
/// assert_eq!(date.to_string(), "2024-01-15");
/// assert!(parse_deadline("31-02-2024").is_err());
/// ```
pub fn parse_deadline(text: &str) -> Result<NaiveDate, BoardError> {
    let invalid = || BoardError::InvalidDeadline {
        input: text.to_string(),
    };

    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DEADLINE_FORMAT).map_err(|_| invalid())
}

/// Parse a priority (High, Medium, Low)
pub fn parse_priority(text: &str) -> Result<Priority, BoardError> {
    text.parse()
}

/// Parse a task status (Pending, Done)
pub fn parse_status(text: &str) -> Result<TaskStatus, BoardError> {
    text.parse()
}

/// Parse a status filter (All, Pending, Done); `None` means All
pub fn parse_status_filter(text: Option<&str>) -> Result<StatusFilter, BoardError> {
    match text {
        None | Some("") => Ok(StatusFilter::All),
        Some(s) => s.parse(),
    }
}

/// Normalize a task title by trimming surrounding whitespace
pub fn normalize_title(title: &str) -> String {
    title.trim().to_string()
}
