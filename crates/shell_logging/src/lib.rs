#![deny(missing_docs)]
//! Shared logging utilities for the shell workspace.
//!
//! Every crate logs through the `shell_*` macros below so the backend can be
//! swapped in one place. The app crate installs the real `simplelog` sinks;
//! tests call [`initialize_for_tests`].

use std::sync::Once;

#[doc(hidden)]
pub use log as __log;

/// Very fine detail, off outside debugging sessions.
#[macro_export]
macro_rules! shell_trace {
    ($($arg:tt)*) => {
        $crate::__log::trace!($($arg)*)
    };
}

/// Diagnostics such as ignored bridge messages or rejected links.
#[macro_export]
macro_rules! shell_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

/// Lifecycle milestones: start, stop, mounts, hand-offs.
#[macro_export]
macro_rules! shell_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

/// A collaborator call failed and the shell carried on.
#[macro_export]
macro_rules! shell_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!($($arg)*)
    };
}

/// The shell could not do what it was asked to, e.g. mount a view.
#[macro_export]
macro_rules! shell_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

static TEST_INIT: Once = Once::new();

/// Terminal logger for test binaries. Idempotent; leaves an already
/// installed logger in place.
pub fn initialize_for_tests() {
    TEST_INIT.call_once(|| {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
