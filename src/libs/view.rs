use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};
use std::io::Write;

/// How task results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], format: OutputFormat) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match format {
            OutputFormat::Table => {
                Self::table(tasks).print(&mut out)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, tasks)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }

    pub fn task(task: &Task, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Table => Self::tasks(std::slice::from_ref(task), format),
            OutputFormat::Json => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                serde_json::to_writer_pretty(&mut out, task)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    pub fn table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.description, task.status]);
        }

        table
    }
}
