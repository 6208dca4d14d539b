use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskError>;

/// Failure modes of a repository operation.
///
/// None of these are fatal to the process: the dispatcher prints them and
/// exits normally.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The store could not be reached or is misconfigured.
    #[error("Database is unavailable: {0}")]
    Unavailable(String),

    /// A field was missing or invalid. Raised before any store access.
    #[error("{0}")]
    Validation(String),

    #[error("Task with id {0} not found")]
    NotFound(i64),

    /// The store rejected a statement.
    #[error("Database error: {0}")]
    Execution(#[from] rusqlite::Error),
}

impl TaskError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, TaskError::Unavailable(_))
    }
}
