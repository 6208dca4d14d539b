#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::cell::Cell;
    use taskman::commands::Cli;
    use taskman::db::db::{ConnectionProvider, Session, SqliteProvider};
    use taskman::db::tasks::Tasks;
    use taskman::libs::config::DbConfig;
    use taskman::libs::error::{Result, TaskError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Provider that counts sessions and can be switched off.
    struct CountingProvider {
        inner: SqliteProvider,
        acquired: Cell<usize>,
        available: bool,
    }

    impl ConnectionProvider for CountingProvider {
        fn acquire(&self) -> Result<Session> {
            self.acquired.set(self.acquired.get() + 1);
            if !self.available {
                return Err(TaskError::Unavailable("store switched off".to_string()));
            }
            self.inner.acquire()
        }
    }

    struct CommandTestContext {
        _temp_dir: TempDir,
        tasks: Tasks<CountingProvider>,
    }

    impl CommandTestContext {
        fn run(&self, args: &[&str]) {
            let cli = Cli::try_parse_from(std::iter::once("taskman").chain(args.iter().copied())).unwrap();
            cli.run(&self.tasks).unwrap();
        }

        fn acquired(&self) -> usize {
            self.tasks.provider().acquired.get()
        }

        fn switch_off(&mut self) {
            let provider = CountingProvider {
                inner: self.tasks.provider().inner.clone(),
                acquired: Cell::new(0),
                available: false,
            };
            self.tasks = Tasks::new(provider);
        }
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let provider = CountingProvider {
                inner: SqliteProvider::new(DbConfig::local("tasks", temp_dir.path().to_string_lossy())),
                acquired: Cell::new(0),
                available: true,
            };
            CommandTestContext {
                _temp_dir: temp_dir,
                tasks: Tasks::new(provider),
            }
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_each_command_uses_one_session(ctx: &mut CommandTestContext) {
        ctx.run(&["migrate_table"]);
        ctx.run(&["add", "-d", "buy milk", "-s", "pending"]);
        ctx.run(&["view_all"]);
        ctx.run(&["find", "-k", "milk"]);
        ctx.run(&["find_by_id", "--id", "1"]);
        ctx.run(&["update", "--id", "1", "-d", "buy oat milk", "-s", "ongoing"]);
        ctx.run(&["delete", "--id", "1", "--json"]);

        assert_eq!(ctx.acquired(), 7);
        assert!(ctx.tasks.list_all().unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_logical_failures_do_not_fail_the_command(ctx: &mut CommandTestContext) {
        ctx.run(&["migrate_table"]);
        ctx.run(&["find_by_id", "--id", "99"]);
        ctx.run(&["update", "--id", "99", "-d", "ghost", "-s", "completed"]);
        ctx.run(&["delete", "--id", "99"]);

        assert!(ctx.tasks.list_all().unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_invalid_id_is_rejected_before_connecting(ctx: &mut CommandTestContext) {
        ctx.run(&["find_by_id", "--id", "0"]);
        ctx.run(&["delete", "--id=-1"]);
        ctx.run(&["add", "-d", "", "-s", "pending"]);

        assert_eq!(ctx.acquired(), 0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_unavailable_store_is_reported_not_raised(ctx: &mut CommandTestContext) {
        ctx.switch_off();

        ctx.run(&["migrate_table"]);
        ctx.run(&["view_all"]);
        ctx.run(&["add", "-d", "buy milk", "-s", "pending"]);
        ctx.run(&["find", "-k", "milk"]);
        ctx.run(&["find_by_id", "--id", "1"]);
        ctx.run(&["update", "--id", "1", "-d", "x", "-s", "ongoing"]);
        ctx.run(&["delete", "--id", "1"]);

        assert_eq!(ctx.acquired(), 7);
        assert!(ctx.tasks.is_exist(1).unwrap_err().is_unavailable());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_unavailable_store_fails_every_operation(ctx: &mut CommandTestContext) {
        ctx.switch_off();
        let tasks = &ctx.tasks;

        assert!(tasks.initialize_schema().unwrap_err().is_unavailable());
        assert!(tasks.list_all().unwrap_err().is_unavailable());
        assert!(tasks.create("buy milk", "pending").unwrap_err().is_unavailable());
        assert!(tasks.find("milk").unwrap_err().is_unavailable());
        assert!(tasks.find_by_id(1).unwrap_err().is_unavailable());
        assert!(tasks.update(1, "buy oat milk", "ongoing").unwrap_err().is_unavailable());
        assert!(tasks.delete(1).unwrap_err().is_unavailable());
        assert_eq!(ctx.acquired(), 7);
    }
}
