//! Shofyou app shell: wires the pure core to the platform collaborators.
//!
//! A native host calls [`ShellConfig::init_logging`], builds a [`Platform`]
//! from its own browser, picker and window implementations, hands both to
//! [`ShellRuntime::new`], and forwards its callbacks to the runtime on the UI
//! thread.
mod config;
pub mod platform;
pub mod ui;

pub use config::ShellConfig;
pub use platform::app::{BrowserEvent, Platform, ShellRuntime};
pub use platform::logging::{initialize as initialize_logging, LogDestination, DEFAULT_LOG_FILE};
pub use ui::{OfflineScreen, ProgressFrame, ShellSurface, SurfaceCommand};
