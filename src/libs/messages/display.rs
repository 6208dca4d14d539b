use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === SCHEMA MESSAGES ===
            Message::SchemaCreated => "Tasks table successfully created".to_string(),
            Message::SchemaCreateFailed(error) => format!("Error upon creating tasks table: {}", error),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created successfully with ID: {}", id),
            Message::TaskUpdated(id) => format!("Task updated successfully with ID: {}", id),
            Message::TaskDeleted(id) => format!("Task deleted successfully with ID: {}", id),
            Message::TaskFound(id) => format!("Task with id {}:", id),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksMatching(keyword) => format!("Tasks matching '{}':", keyword),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TaskOperationFailed(error) => format!("An error occurred: {}", error),

            // === DATABASE MESSAGES ===
            Message::DatabaseUnavailable(reason) => format!("Failed to connect to the database: {}", reason),
        };

        write!(f, "{}", text)
    }
}
