use crate::InstanceId;

/// What the shell shows. The browser is only mounted while online.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Offline,
    Browser { instance: InstanceId, url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Dark content on a light background.
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBarView {
    pub style: StatusBarStyle,
    pub translucent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressView {
    pub progress: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub screen: Screen,
    pub status_bar: StatusBarView,
    pub progress: ProgressView,
    pub session_url: String,
    pub retry_count: u64,
    pub upload_pending: bool,
    pub dirty: bool,
}
