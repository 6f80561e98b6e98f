use std::time::Duration;

pub const ACCENT_COLOR: &str = "#2196F3";

pub const OFFLINE_ICON: &str = "wifi-off";
pub const OFFLINE_ICON_SIZE: u32 = 80;
pub const OFFLINE_ICON_COLOR: &str = "#999";
pub const OFFLINE_TITLE: &str = "No Internet Connection";
pub const OFFLINE_MESSAGE: &str = "Please check your internet connection and try again.";
pub const RETRY_LABEL: &str = "Retry";

pub const PROGRESS_BAR_HEIGHT: u32 = 3;
pub const PROGRESS_FADE_IN: Duration = Duration::from_millis(200);
pub const PROGRESS_FADE_OUT: Duration = Duration::from_millis(300);
pub const PROGRESS_WIDTH_DURATION: Duration = Duration::from_millis(300);
