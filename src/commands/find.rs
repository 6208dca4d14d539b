use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{messages::Message, view::OutputFormat},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Text contained in the description, or an exact status. Quote it when it contains spaces
    #[arg(short, long)]
    pub keyword: String,
}

pub fn cmd<P: ConnectionProvider>(tasks: &Tasks<P>, args: FindArgs, format: OutputFormat) -> Result<()> {
    match tasks.find(&args.keyword) {
        Ok(found) => super::print_tasks(&found, Message::TasksMatching(args.keyword), format),
        Err(e) => {
            super::report(&e);
            Ok(())
        }
    }
}
