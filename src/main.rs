use anyhow::Result;
use taskman::commands::Cli;
use taskman::libs::{config::DbConfig, logging};

fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the shell.
    let _ = dotenv::dotenv();
    logging::init()?;

    Cli::menu(DbConfig::from_env())
}
