use log::LevelFilter;
use shofyou_core::{
    AppState, DomainMatch, NavigationGuard, PickerOptions, CANONICAL_DOMAIN, CANONICAL_URL,
};
use shofyou_engine::{
    BrowserOptions, ExternalBrowserStyle, ProbeSettings, DEFAULT_POST_MESSAGE,
};

use crate::platform::logging::{self, LogDestination};

/// Shell configuration. `Default` carries the shipped constants; hosts only
/// deviate for tests or white-label builds.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub canonical_url: String,
    pub domain: String,
    pub domain_match: DomainMatch,
    /// Window background set once at startup.
    pub background_color: String,
    /// Page-side expression that posts a bridge message to native code.
    pub post_message: String,
    pub browser: BrowserOptions,
    pub external_style: ExternalBrowserStyle,
    pub picker: PickerOptions,
    /// Built-in TCP probe; `None` when the host reports reachability itself.
    pub probe: Option<ProbeSettings>,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl ShellConfig {
    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::new(self.domain.clone(), self.domain_match)
    }

    pub fn initial_state(&self) -> AppState {
        AppState::with_target(self.guard(), self.canonical_url.clone())
    }

    /// Installs the global logger for `log_destination` at `log_level`.
    /// Call once, before [`crate::ShellRuntime::start`].
    pub fn init_logging(&self) {
        logging::initialize(&self.log_destination, self.log_level);
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            canonical_url: CANONICAL_URL.to_string(),
            domain: CANONICAL_DOMAIN.to_string(),
            domain_match: DomainMatch::Substring,
            background_color: "#ffffff".to_string(),
            post_message: DEFAULT_POST_MESSAGE.to_string(),
            browser: BrowserOptions::default(),
            external_style: ExternalBrowserStyle::default(),
            picker: PickerOptions::default(),
            probe: None,
            log_destination: LogDestination::Terminal,
            log_level: LevelFilter::Info,
        }
    }
}
