use crate::error::BoardError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// chrono format string for deadline text (DD-MM-YYYY)
pub const DEADLINE_FORMAT: &str = "%d-%m-%Y";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task priority
///
/// Ordered by rank: High sorts before Medium, Medium before Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank (1 = most important)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(BoardError::InvalidPriority {
                input: s.to_string(),
            }),
        }
    }
}

/// Completion status of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "Done" => Ok(TaskStatus::Done),
            _ => Err(BoardError::InvalidStatus {
                input: s.to_string(),
            }),
        }
    }
}

/// Status filter for listing tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Check if a task status passes this filter
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(StatusFilter::All),
            other => other
                .parse::<TaskStatus>()
                .map(StatusFilter::Only)
                .map_err(|_| BoardError::InvalidStatusFilter {
                    input: s.to_string(),
                }),
        }
    }
}

/// Urgency label derived from a pending task's deadline at read time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UrgencyTag {
    /// Deadline already passed
    Overdue,
    /// Deadline falls within the urgent window (today included)
    Urgent,
}

impl UrgencyTag {
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyTag::Overdue => "Overdue",
            UrgencyTag::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for UrgencyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An academic task
///
/// `title` is the natural key used by the store for find and remove.
/// Cloning a task yields an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Title of the task (store key)
    pub title: String,
    /// Course or subject the task belongs to
    pub subject: String,
    pub priority: Priority,
    /// Due date (date only)
    pub deadline: NaiveDate,
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        priority: Priority,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            priority,
            deadline,
            status: TaskStatus::Pending,
        }
    }

    /// Check if this task is completed
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Deadline rendered as DD-MM-YYYY
    pub fn deadline_text(&self) -> String {
        self.deadline.format(DEADLINE_FORMAT).to_string()
    }
}
