//! Output macros for application messages.
//!
//! Each macro prints a [`Message`](super::Message) with a fixed prefix. In
//! normal mode the text goes straight to stdout (stderr for errors). When
//! debug mode is on, the same text is emitted as a `tracing` event instead so
//! it interleaves with the repository's own log lines.
//!
//! Debug mode is enabled by setting `TASKMAN_DEBUG`. `RUST_LOG` only tunes
//! the log filter and never moves user-facing output into the log.
//!
//! ```rust
//! use taskman::{msg_error, msg_success};
//! use taskman::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated(1));
//! msg_error!(Message::TaskNotFound);
//! ```

use std::sync::OnceLock;

pub const DEBUG_ENV: &str = "TASKMAN_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether message output is routed through `tracing`. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| debug_requested(|key| std::env::var(key).ok()))
}

/// Debug mode as seen through `lookup`.
pub fn debug_requested<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(DEBUG_ENV).is_some()
}

/// Prints a message without prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}
