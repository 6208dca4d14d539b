use crate::libs::messages::macros::is_debug_mode;
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Filter used when `RUST_LOG` is not set but `TASKMAN_DEBUG` is.
pub const DEBUG_LOG_LEVEL: &str = "debug";

/// Installs the global tracing subscriber.
///
/// Log lines go to stderr so that task output on stdout stays parseable.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level()))
        .context("Invalid log level configuration")?;

    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn default_level() -> &'static str {
    if is_debug_mode() {
        DEBUG_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}
