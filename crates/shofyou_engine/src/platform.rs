//! Contracts for the platform components the shell drives but does not own:
//! the embedded browser, the system browser, window chrome, alerts, deep
//! links and the media library. The native host implements these.

use std::sync::mpsc;

use async_trait::async_trait;
use shofyou_core::{InstanceId, PickedAsset, PickerOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("browser view {instance}: {reason}")]
    Browser { instance: InstanceId, reason: String },
    #[error("external browser could not open {url}: {reason}")]
    ExternalBrowser { url: String, reason: String },
    #[error("system ui: {0}")]
    SystemUi(String),
    #[error("media library: {0}")]
    MediaLibrary(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Default,
    LoadCacheElseNetwork,
    NoCache,
    CacheOnly,
}

/// Fixed configuration of the embedded browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub start_in_loading_state: bool,
    pub scales_page_to_fit: bool,
    pub cache_enabled: bool,
    pub cache_mode: CacheMode,
    pub incognito: bool,
    pub third_party_cookies_enabled: bool,
    pub shared_cookies_enabled: bool,
    pub allows_inline_media_playback: bool,
    pub media_playback_requires_user_action: bool,
    pub allows_fullscreen_video: bool,
    pub pull_to_refresh_enabled: bool,
    /// Android only: render on a hardware layer.
    pub hardware_layer: bool,
    pub background_color: String,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            start_in_loading_state: true,
            scales_page_to_fit: true,
            cache_enabled: true,
            cache_mode: CacheMode::LoadCacheElseNetwork,
            incognito: false,
            third_party_cookies_enabled: true,
            shared_cookies_enabled: true,
            allows_inline_media_playback: true,
            media_playback_requires_user_action: false,
            allows_fullscreen_video: true,
            pull_to_refresh_enabled: false,
            hardware_layer: true,
            background_color: "#fff".to_string(),
        }
    }
}

/// Everything a host needs to construct one browser view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSpec {
    pub instance: InstanceId,
    pub url: String,
    pub options: BrowserOptions,
    /// Script run in every loaded page.
    pub injected_script: String,
}

/// One mounted embedded-browser instance.
///
/// The host reports this instance's callbacks (load start/progress/end,
/// page messages, should-start-load) tagged with [`BrowserView::instance`].
pub trait BrowserView {
    fn instance(&self) -> InstanceId;
    fn navigate(&mut self, url: &str) -> Result<(), PlatformError>;
    fn stop_loading(&mut self) -> Result<(), PlatformError>;
    fn inject_script(&mut self, script: &str) -> Result<(), PlatformError>;
    /// Releases the view, its message listeners and its injected scripts.
    /// No callbacks for this instance may be delivered afterwards.
    fn dispose(&mut self);
}

pub trait BrowserFactory {
    fn create(&mut self, spec: BrowserSpec) -> Result<Box<dyn BrowserView>, PlatformError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissButtonStyle {
    Done,
    Close,
    Cancel,
}

/// Look of the system browser sheet used for hand-offs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalBrowserStyle {
    pub controls_color: String,
    pub toolbar_color: String,
    pub dismiss_button: DismissButtonStyle,
    pub reader_mode: bool,
}

impl Default for ExternalBrowserStyle {
    fn default() -> Self {
        Self {
            controls_color: "#2196F3".to_string(),
            toolbar_color: "#fff".to_string(),
            dismiss_button: DismissButtonStyle::Close,
            reader_mode: false,
        }
    }
}

pub trait ExternalBrowser {
    fn open(&mut self, url: &str, style: &ExternalBrowserStyle) -> Result<(), PlatformError>;
}

pub trait SystemUi {
    fn set_background_color(&mut self, color: &str) -> Result<(), PlatformError>;
}

pub trait AlertPresenter {
    /// Blocking, informational alert.
    fn alert(&mut self, message: &str);
}

/// Handle returned by [`LinkSource::subscribe`].
pub trait LinkSubscription {
    fn remove(self: Box<Self>);
}

/// Deep-link delivery.
pub trait LinkSource {
    /// URL that launched the process, if any.
    fn initial_url(&mut self) -> Option<String>;
    /// Delivers URLs opened while running into `sink` until removed.
    fn subscribe(&mut self, sink: mpsc::Sender<String>) -> Box<dyn LinkSubscription>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPermission {
    Granted,
    Denied,
}

/// Device media library. Both calls may wait on the user indefinitely.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    async fn request_permission(&self) -> Result<MediaPermission, PlatformError>;

    /// Returns `None` when the user dismisses the picker.
    async fn pick(
        &self,
        options: &PickerOptions,
    ) -> Result<Option<Vec<PickedAsset>>, PlatformError>;
}
