use crate::{
    db::{db::ConnectionProvider, tasks::Tasks},
    libs::{error::TaskError, messages::Message},
    msg_error, msg_success,
};
use anyhow::Result;

pub fn cmd<P: ConnectionProvider>(tasks: &Tasks<P>) -> Result<()> {
    match tasks.initialize_schema() {
        Ok(()) => msg_success!(Message::SchemaCreated),
        Err(TaskError::Execution(e)) => msg_error!(Message::SchemaCreateFailed(e.to_string())),
        Err(e) => super::report(&e),
    }

    Ok(())
}
