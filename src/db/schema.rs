//! One-shot, idempotent schema setup.
//!
//! The store has no native enumerated type, so the closed status set is kept
//! in a `task_status` lookup table that `tasks.status` references. The lookup
//! table is created and seeded only when the catalog does not list it yet;
//! the tasks table uses `IF NOT EXISTS`. Both happen in one transaction.

use crate::libs::task::TaskStatus;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

pub const STATUS_TYPE_NAME: &str = "task_status";
pub const TASKS_TABLE_NAME: &str = "tasks";

const SELECT_CATALOG_TABLE: &str = "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1";
const SCHEMA_TASK_STATUS: &str = "CREATE TABLE task_status (
    name TEXT NOT NULL PRIMARY KEY
) WITHOUT ROWID";
const INSERT_TASK_STATUS: &str = "INSERT INTO task_status (name) VALUES (?1)";
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    status TEXT NOT NULL REFERENCES task_status(name)
        CHECK (status IN ('pending', 'ongoing', 'completed'))
)";

/// Whether the catalog lists a table called `name`.
pub fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    conn.query_row(SELECT_CATALOG_TABLE, params![name], |_| Ok(()))
        .optional()
        .map(|found| found.is_some())
}

/// Creates the status type and the tasks table if they are missing.
///
/// Returns `true` when the status type had to be created.
pub fn create(tx: &Transaction) -> rusqlite::Result<bool> {
    let created_type = if table_exists(tx, STATUS_TYPE_NAME)? {
        false
    } else {
        tx.execute(SCHEMA_TASK_STATUS, [])?;
        for status in TaskStatus::ALL {
            tx.execute(INSERT_TASK_STATUS, params![status])?;
        }
        true
    };

    tx.execute(SCHEMA_TASKS, [])?;

    Ok(created_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_twice_keeps_single_status_set() {
        let mut conn = Connection::open_in_memory().unwrap();

        let tx = conn.transaction().unwrap();
        assert!(create(&tx).unwrap());
        tx.commit().unwrap();

        let tx = conn.transaction().unwrap();
        assert!(!create(&tx).unwrap());
        tx.commit().unwrap();

        let statuses: i64 = conn
            .query_row("SELECT COUNT(*) FROM task_status", [], |row| row.get(0))
            .unwrap();
        assert_eq!(statuses, 3);
        assert!(table_exists(&conn, TASKS_TABLE_NAME).unwrap());
    }

    #[test]
    fn test_status_outside_set_is_rejected_by_store() {
        let mut conn = Connection::open_in_memory().unwrap();
        let tx = conn.transaction().unwrap();
        create(&tx).unwrap();
        tx.commit().unwrap();

        let result = conn.execute(
            "INSERT INTO tasks (description, status) VALUES ('x', 'archived')",
            [],
        );
        assert!(result.is_err());
    }
}
