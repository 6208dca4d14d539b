use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{messages::Message, view::OutputFormat},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FindByIdArgs {
    /// Task ID
    #[arg(long)]
    pub id: i64,
}

pub fn cmd<P: ConnectionProvider>(tasks: &Tasks<P>, args: FindByIdArgs, format: OutputFormat) -> Result<()> {
    match tasks.find_by_id(args.id) {
        Ok(task) => super::print_task(&task, Message::TaskFound(task.id), format),
        Err(e) => {
            super::report(&e);
            Ok(())
        }
    }
}
