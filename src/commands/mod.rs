//! Command dispatcher.
//!
//! Each CLI command maps to exactly one repository call. Usage errors (unknown
//! command, missing flag, status outside the allowed set) are raised by `clap`
//! before the repository is touched and exit non-zero. Every outcome of the
//! repository call itself, including validation failures, missing tasks and
//! an unreachable store, is printed and the process exits normally.

pub mod add;
pub mod delete;
pub mod find;
pub mod find_by_id;
pub mod migrate;
pub mod update;
pub mod view_all;

use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{
        config::DbConfig,
        error::TaskError,
        messages::Message,
        task::Task,
        view::{OutputFormat, View},
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(name = "migrate_table", about = "Create the tasks table if it does not exist")]
    MigrateTable,
    #[command(name = "view_all", about = "Show all tasks")]
    ViewAll,
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Find tasks by description or status")]
    Find(find::FindArgs),
    #[command(name = "find_by_id", about = "Show a single task")]
    FindById(find_by_id::FindByIdArgs),
    #[command(about = "Update the description and status of a task")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Task Manager - Manage your tasks with various commands.", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Print tasks as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the process arguments and runs the command against the store
    /// described by `config`.
    pub fn menu(config: DbConfig) -> Result<()> {
        let cli = Self::parse();
        cli.run(&Tasks::from_config(config))
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    pub fn run<P: ConnectionProvider>(self, tasks: &Tasks<P>) -> Result<()> {
        let format = self.output_format();
        match self.command {
            Commands::MigrateTable => migrate::cmd(tasks),
            Commands::ViewAll => view_all::cmd(tasks, format),
            Commands::Add(args) => add::cmd(tasks, args, format),
            Commands::Find(args) => find::cmd(tasks, args, format),
            Commands::FindById(args) => find_by_id::cmd(tasks, args, format),
            Commands::Update(args) => update::cmd(tasks, args, format),
            Commands::Delete(args) => delete::cmd(tasks, args, format),
        }
    }
}

/// Prints a failed repository call. Never fails itself.
pub(crate) fn report(error: &TaskError) {
    match error {
        TaskError::Unavailable(reason) => msg_error!(Message::DatabaseUnavailable(reason.clone())),
        TaskError::NotFound(_) => msg_error!(Message::TaskNotFound),
        TaskError::Validation(_) => msg_error!(error),
        TaskError::Execution(e) => msg_error!(Message::TaskOperationFailed(e.to_string())),
    }
}

/// Prints a task list under `header`, or a notice when it is empty.
pub(crate) fn print_tasks(tasks: &[Task], header: Message, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => View::tasks(tasks, format),
        OutputFormat::Table if tasks.is_empty() => {
            msg_info!(Message::TasksNotFound);
            Ok(())
        }
        OutputFormat::Table => {
            msg_print!(header);
            View::tasks(tasks, format)
        }
    }
}

/// Prints a single task, preceded by `header` in table mode.
pub(crate) fn print_task(task: &Task, header: Message, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Table {
        msg_print!(header);
    }
    View::task(task, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::TaskStatus;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("taskman").chain(args.iter().copied()))
    }

    #[test]
    fn test_parses_every_command_name() {
        assert!(matches!(parse(&["migrate_table"]).unwrap().command, Commands::MigrateTable));
        assert!(matches!(parse(&["view_all"]).unwrap().command, Commands::ViewAll));
        assert!(matches!(parse(&["find", "-k", "milk"]).unwrap().command, Commands::Find(_)));
        assert!(matches!(parse(&["find_by_id", "--id", "3"]).unwrap().command, Commands::FindById(_)));
        assert!(matches!(parse(&["delete", "--id", "3"]).unwrap().command, Commands::Delete(_)));
    }

    #[test]
    fn test_add_reads_short_and_long_flags() {
        let cli = parse(&["add", "-d", "buy milk", "--status", "ongoing"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.description, "buy milk");
                assert_eq!(args.status, TaskStatus::Ongoing);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_update_requires_all_flags() {
        let err = parse(&["update", "--id", "1", "-d", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_add_rejects_status_outside_set() {
        let err = parse(&["add", "-d", "x", "-s", "archived"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_command_is_usage_error() {
        let err = parse(&["archive"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = parse(&["view_all", "--json"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
        let cli = parse(&["view_all"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Table);
    }
}
