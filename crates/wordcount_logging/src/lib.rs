#![deny(missing_docs)]
//! Shared logging utilities for the word-count workspace.
//!
//! This crate provides the `wc_*` logging macros used across the codebase,
//! the refresh-pass counter stamped into log lines, and a logger for tests.
//! Embedders install their own `log` backend.

use std::cell::Cell;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

thread_local! {
    /// Thread-local storage for the current refresh pass number.
    static PASS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the refresh pass number for the current thread.
/// The refresh loop calls this once per pass.
pub fn set_pass(pass: u64) {
    PASS.with(|v| v.set(pass));
}

/// Retrieves the refresh pass number for the current thread.
/// Returns 0 if no pass has run yet.
pub fn current_pass() -> u64 {
    PASS.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current pass.
#[macro_export]
macro_rules! wc_trace {
    ($($arg:tt)*) => {{
        log::trace!("[pass {}] {}", $crate::current_pass(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current pass.
#[macro_export]
macro_rules! wc_debug {
    ($($arg:tt)*) => {{
        log::debug!("[pass {}] {}", $crate::current_pass(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! wc_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! wc_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::{current_pass, set_pass};

    #[test]
    fn pass_counter_is_per_thread() {
        set_pass(7);
        assert_eq!(current_pass(), 7);
        let other = std::thread::spawn(current_pass).join().unwrap_or(u64::MAX);
        assert_eq!(other, 0);
    }
}
