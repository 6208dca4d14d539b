use super::db::{ConnectionProvider, Session, SqliteProvider};
use super::schema;
use crate::libs::config::DbConfig;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::{validate_id, Task, TaskDraft};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use tracing::{debug, error, info};

const SELECT_TASKS: &str = "SELECT id, description, status FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, description, status FROM tasks WHERE id = ?1";
const SELECT_TASKS_MATCHING: &str = "SELECT id, description, status FROM tasks
    WHERE instr(description, ?1) > 0
    OR status = ?1";
const INSERT_TASK: &str = "INSERT INTO tasks (description, status) VALUES (?1, ?2)
    RETURNING id, description, status";
const UPDATE_TASK: &str = "UPDATE tasks SET description = ?2, status = ?3 WHERE id = ?1
    RETURNING id, description, status";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1
    RETURNING id, description, status";

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        status: row.get(2)?,
    })
}

/// Repository for the `tasks` table.
///
/// Every operation opens its own session through the provider and closes it
/// before returning, whatever the outcome. Input is validated before a
/// session is requested. Mutations run in a transaction that is committed on
/// success and explicitly rolled back on failure.
pub struct Tasks<P: ConnectionProvider = SqliteProvider> {
    provider: P,
}

impl Tasks<SqliteProvider> {
    pub fn from_config(config: DbConfig) -> Self {
        Self::new(SqliteProvider::new(config))
    }
}

impl<P: ConnectionProvider> Tasks<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Creates the status type and the tasks table if they do not exist yet.
    pub fn initialize_schema(&self) -> Result<()> {
        debug!("initializing schema");
        let created_type = self.write(|tx| schema::create(tx))?;
        if created_type {
            info!(name = schema::STATUS_TYPE_NAME, "created status type");
        }
        Ok(())
    }

    /// All tasks in store order.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        debug!("listing all tasks");
        self.read(|conn| {
            let mut stmt = conn.prepare(SELECT_TASKS)?;
            let task_iter = stmt.query_map([], task_from_row)?;
            task_iter.collect()
        })
    }

    pub fn create(&self, description: &str, status: &str) -> Result<Task> {
        let draft = TaskDraft::new(description, status)?;
        debug!(status = %draft.status, "creating task");

        self.write(|tx| tx.query_row(INSERT_TASK, params![draft.description, draft.status], task_from_row))
    }

    /// Tasks whose description contains `keyword` (case-sensitive) or whose
    /// status is exactly `keyword`.
    pub fn find(&self, keyword: &str) -> Result<Vec<Task>> {
        debug!(keyword, "searching tasks");
        self.read(|conn| {
            let mut stmt = conn.prepare(SELECT_TASKS_MATCHING)?;
            let task_iter = stmt.query_map(params![keyword], task_from_row)?;
            task_iter.collect()
        })
    }

    pub fn find_by_id(&self, id: i64) -> Result<Task> {
        let id = validate_id(id)?;
        debug!(id, "fetching task");

        self.read(|conn| conn.query_row(SELECT_TASK_BY_ID, params![id], task_from_row).optional())?
            .ok_or(TaskError::NotFound(id))
    }

    /// Replaces description and status of task `id` and returns the stored row.
    ///
    /// The statement's returned row is the existence check: an unknown id
    /// leaves the store untouched and yields [`TaskError::NotFound`].
    pub fn update(&self, id: i64, description: &str, status: &str) -> Result<Task> {
        let id = validate_id(id)?;
        let draft = TaskDraft::new(description, status)?;
        debug!(id, status = %draft.status, "updating task");

        self.write(|tx| {
            tx.query_row(UPDATE_TASK, params![id, draft.description, draft.status], task_from_row)
                .optional()
        })?
        .ok_or(TaskError::NotFound(id))
    }

    /// Deletes task `id` and returns the row as it was before deletion.
    pub fn delete(&self, id: i64) -> Result<Task> {
        let id = validate_id(id)?;
        debug!(id, "deleting task");

        self.write(|tx| tx.query_row(DELETE_TASK, params![id], task_from_row).optional())?
            .ok_or(TaskError::NotFound(id))
    }

    /// Looks up task `id` on a session of its own.
    pub fn is_exist(&self, id: i64) -> Result<Option<Task>> {
        let id = validate_id(id)?;
        self.read(|conn| conn.query_row(SELECT_TASK_BY_ID, params![id], task_from_row).optional())
    }

    fn session(&self) -> Result<Session> {
        self.provider.acquire()
    }

    fn read<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let mut session = self.session()?;
        let result = op(&*session.conn()?).map_err(|e| {
            error!(error = %e, "query failed");
            TaskError::from(e)
        });
        session.close();
        result
    }

    /// Runs `op` in a transaction. Committed when the outcome touched a row,
    /// rolled back otherwise.
    fn write<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Transaction) -> rusqlite::Result<T>,
        T: Outcome,
    {
        let mut session = self.session()?;
        let result = Self::in_transaction(session.conn()?, op);
        session.close();
        result
    }

    fn in_transaction<T, F>(conn: &mut Connection, op: F) -> Result<T>
    where
        F: FnOnce(&Transaction) -> rusqlite::Result<T>,
        T: Outcome,
    {
        let tx = conn.transaction()?;
        match op(&tx) {
            Ok(value) if value.is_effective() => {
                tx.commit()?;
                Ok(value)
            }
            Ok(value) => {
                if let Err(e) = tx.rollback() {
                    error!(error = %e, "rollback failed");
                }
                Ok(value)
            }
            Err(e) => {
                error!(error = %e, "statement failed, rolling back");
                if let Err(rollback_err) = tx.rollback() {
                    error!(error = %rollback_err, "rollback failed");
                }
                Err(e.into())
            }
        }
    }
}

/// Value produced inside a transaction. Ineffective outcomes are rolled back.
trait Outcome {
    fn is_effective(&self) -> bool;
}

impl Outcome for Task {
    fn is_effective(&self) -> bool {
        true
    }
}

impl Outcome for bool {
    fn is_effective(&self) -> bool {
        true
    }
}

impl<T> Outcome for Option<T> {
    fn is_effective(&self) -> bool {
        self.is_some()
    }
}
