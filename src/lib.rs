//! # Taskman
//!
//! A command-line task manager. Tasks have an id, a description and a status
//! (`pending`, `ongoing` or `completed`) and live in a single `tasks` table.
//!
//! ## Layout
//!
//! - [`commands`]: CLI parsing and the dispatcher that maps a command to one repository call
//! - [`db`]: connection provider, schema setup and the task repository
//! - [`libs`]: configuration, domain types, errors, logging and terminal output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//! use taskman::libs::config::DbConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu(DbConfig::from_env())
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
