//! Connection provider for the task store.
//!
//! A [`Session`] is opened for every repository operation and closed when the
//! operation ends. There is no pooling and no connection is shared between
//! operations.

use crate::libs::config::DbConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Result, TaskError};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::{debug, error, warn};

pub const DB_FILE_EXTENSION: &str = "db";

/// Opens sessions against the store.
///
/// Implementations log the failure at error level before returning
/// [`TaskError::Unavailable`]; callers never receive a half-open session.
pub trait ConnectionProvider {
    fn acquire(&self) -> Result<Session>;
}

/// An open handle to the store.
///
/// Closing is idempotent, and dropping an open session closes it.
pub struct Session {
    conn: Option<Connection>,
}

impl Session {
    pub fn new(conn: Connection) -> Self {
        Self { conn: Some(conn) }
    }

    pub fn conn(&mut self) -> Result<&mut Connection> {
        self.conn
            .as_mut()
            .ok_or_else(|| TaskError::Unavailable("session already closed".to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Closes the underlying connection. A no-op on a closed session.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                warn!(error = %e, "failed to close database connection");
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

/// Provider backed by an SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    config: DbConfig,
}

impl SqliteProvider {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Resolves the database file: `<DB_HOST or data dir>/<DB_NAME>.db`.
    pub fn db_path(&self) -> std::result::Result<PathBuf, String> {
        let name = self
            .config
            .name
            .as_deref()
            .ok_or_else(|| "DB_NAME is not set".to_string())?;
        self.config.port_number()?;

        let storage = match &self.config.host {
            Some(host) => DataStorage::at(host),
            None => DataStorage::default(),
        };
        let file_name = if name.ends_with(&format!(".{}", DB_FILE_EXTENSION)) {
            name.to_string()
        } else {
            format!("{}.{}", name, DB_FILE_EXTENSION)
        };

        storage
            .get_path(&file_name)
            .map_err(|e| format!("cannot prepare {}: {}", storage.base_path().display(), e))
    }

    fn open(&self) -> std::result::Result<Connection, String> {
        let path = self.db_path()?;
        debug!(path = %path.display(), user = ?self.config.user, "opening database session");

        let conn = Connection::open(&path).map_err(|e| e.to_string())?;
        conn.pragma_update(None, "foreign_keys", "ON").map_err(|e| e.to_string())?;

        Ok(conn)
    }
}

impl ConnectionProvider for SqliteProvider {
    fn acquire(&self) -> Result<Session> {
        match self.open() {
            Ok(conn) => Ok(Session::new(conn)),
            Err(reason) => {
                error!(%reason, "database connection error");
                Err(TaskError::Unavailable(reason))
            }
        }
    }
}
