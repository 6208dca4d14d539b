/// Every line of user-facing text the application prints.
///
/// The text itself lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SCHEMA MESSAGES ===
    SchemaCreated,
    SchemaCreateFailed(String),

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskFound(i64),
    TaskNotFound,
    TasksHeader,
    TasksMatching(String),
    TasksNotFound,
    TaskOperationFailed(String),

    // === DATABASE MESSAGES ===
    DatabaseUnavailable(String),
}
