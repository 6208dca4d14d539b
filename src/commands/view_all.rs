use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{messages::Message, view::OutputFormat},
};
use anyhow::Result;

pub fn cmd<P: ConnectionProvider>(tasks: &Tasks<P>, format: OutputFormat) -> Result<()> {
    match tasks.list_all() {
        Ok(found) => super::print_tasks(&found, Message::TasksHeader, format),
        Err(e) => {
            super::report(&e);
            Ok(())
        }
    }
}
