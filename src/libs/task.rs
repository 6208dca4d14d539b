//! Task entity and the closed set of task statuses.
//!
//! A task is the only record the application stores. Its status is drawn from
//! a fixed set of three values which is mirrored at the storage layer by the
//! `task_status` lookup table (see [`crate::db::schema`]).

use crate::libs::error::TaskError;
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task.
///
/// Any status may move to any other; only membership in the set is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Ongoing,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::Ongoing, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Ongoing => "ongoing",
            TaskStatus::Completed => "completed",
        }
    }

    /// Comma separated list of the accepted literals, for error messages.
    pub fn accepted() -> String {
        Self::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    /// Parses the exact lowercase literal. `"Pending"` is not a status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TaskError::Validation(format!("Invalid status '{}'. Must be one of {}", s, Self::accepted())))
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse::<TaskStatus>().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub status: TaskStatus,
}

/// Validated input for an insert or an update.
///
/// Construction performs every check that must pass before the store is
/// touched, so holding a `TaskDraft` means the fields are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn new(description: &str, status: &str) -> Result<Self, TaskError> {
        if description.trim().is_empty() || status.is_empty() {
            return Err(TaskError::Validation("Both description and status are required".to_string()));
        }
        let status = status.parse::<TaskStatus>()?;

        Ok(Self {
            description: description.to_string(),
            status,
        })
    }
}

/// Rejects ids that can never name a stored row.
pub fn validate_id(id: i64) -> Result<i64, TaskError> {
    if id <= 0 {
        return Err(TaskError::Validation(format!("A positive task id is required, got {}", id)));
    }
    Ok(id)
}
