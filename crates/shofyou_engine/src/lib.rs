//! Shofyou engine: collaborator contracts and effect plumbing around the pure core.
mod connectivity;
mod links;
mod picker;
mod platform;
mod probe;
mod scripts;

pub use connectivity::{ConnectivityMonitor, ConnectivitySubscription};
pub use links::LinkDispatcher;
pub use picker::{pick_files, PickerError, PickerEvent, PickerHandle};
pub use platform::{
    AlertPresenter, BrowserFactory, BrowserOptions, BrowserSpec, BrowserView, CacheMode,
    DismissButtonStyle, ExternalBrowser, ExternalBrowserStyle, LinkSource, LinkSubscription,
    MediaLibrary, MediaPermission, PlatformError, SystemUi,
};
pub use probe::{probe_once, ProbeError, ProbeSettings, TcpReachabilityProbe};
pub use scripts::{file_input_hook, file_selected_script, DEFAULT_POST_MESSAGE};
