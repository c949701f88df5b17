//! Convenient macros for application messaging and logging.
//!
//! The macros route every user-facing message either to the tracing system
//! (when debug logging is configured) or to plain console output. Commands
//! never call `println!` directly; they go through `msg_*!` with a typed
//! [`Message`](super::Message) so wording stays centralized.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either `TEMPUS_DEBUG` or `RUST_LOG` is set in
//! the environment. The check is cached in a `OnceLock` so the environment
//! is only inspected once per process.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether messages should be routed through tracing.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TEMPUS_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message, optionally wrapped in blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
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

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix. Writes to stderr in normal mode
/// so script output stays separable from diagnostics.
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

/// Debug-only message with 🔍 prefix; suppressed entirely in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)*));
        }
    };
}

/// Creates an `anyhow::Error` from a [`Message`](super::Message).
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Early-returns an `Err(anyhow::Error)` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
