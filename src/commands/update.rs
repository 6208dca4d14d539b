use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{messages::Message, task::TaskStatus, view::OutputFormat},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Task ID
    #[arg(long)]
    pub id: i64,
    /// New description. Quote it when it contains spaces
    #[arg(short, long)]
    pub description: String,
    /// New status
    #[arg(short, long, value_enum)]
    pub status: TaskStatus,
}

pub fn cmd<P: ConnectionProvider>(tasks: &Tasks<P>, args: UpdateArgs, format: OutputFormat) -> Result<()> {
    match tasks.update(args.id, &args.description, args.status.as_str()) {
        Ok(task) => super::print_task(&task, Message::TaskUpdated(task.id), format),
        Err(e) => {
            super::report(&e);
            Ok(())
        }
    }
}
