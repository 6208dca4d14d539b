//! Storage layer.
//!
//! - [`db`]: connection provider and per-operation sessions
//! - [`schema`]: idempotent creation of the status type and the tasks table
//! - [`tasks`]: the task repository, one method per CLI command
//!
//! ```rust,no_run
//! use taskman::db::tasks::Tasks;
//! use taskman::libs::config::DbConfig;
//!
//! let tasks = Tasks::from_config(DbConfig::from_env());
//! tasks.initialize_schema()?;
//! let task = tasks.create("buy milk", "pending")?;
//! assert_eq!(tasks.find_by_id(task.id)?, task);
//! # Ok::<(), taskman::libs::error::TaskError>(())
//! ```

pub mod db;
pub mod schema;
pub mod tasks;
