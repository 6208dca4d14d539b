use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{messages::Message, task::TaskStatus, view::OutputFormat},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Description of the task. Quote it when it contains spaces
    #[arg(short, long)]
    pub description: String,
    /// Status of the task
    #[arg(short, long, value_enum)]
    pub status: TaskStatus,
}

pub fn cmd<P: ConnectionProvider>(tasks: &Tasks<P>, args: AddArgs, format: OutputFormat) -> Result<()> {
    match tasks.create(&args.description, args.status.as_str()) {
        Ok(task) => super::print_task(&task, Message::TaskCreated(task.id), format),
        Err(e) => {
            super::report(&e);
            Ok(())
        }
    }
}
