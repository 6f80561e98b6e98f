use crate::view_model::{AppViewModel, ProgressView, Screen, StatusBarStyle, StatusBarView};
use crate::{FileInputRequest, NavigationGuard, ProgressIndicator, CANONICAL_URL};

/// Identity of one mounted browser view. A new id is allocated per mount.
pub type InstanceId = u64;
pub type RequestId = u64;

/// File-input activation waiting on the native picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFileRequest {
    pub request_id: RequestId,
    pub instance: InstanceId,
    pub request: FileInputRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    guard: NavigationGuard,
    canonical_url: String,
    session_url: String,
    retry_counter: u64,
    connected: bool,
    started: bool,
    instance: InstanceId,
    next_request_id: RequestId,
    pending: Option<PendingFileRequest>,
    progress: ProgressIndicator,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_target(NavigationGuard::default(), CANONICAL_URL)
    }

    /// State for a shell pinned to `canonical_url`, filtering links with `guard`.
    pub fn with_target(guard: NavigationGuard, canonical_url: impl Into<String>) -> Self {
        let canonical_url = canonical_url.into();
        Self {
            guard,
            session_url: canonical_url.clone(),
            canonical_url,
            retry_counter: 0,
            // Unknown reachability counts as connected.
            connected: true,
            started: false,
            instance: 1,
            next_request_id: 1,
            pending: None,
            progress: ProgressIndicator::new(),
            dirty: false,
        }
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    pub fn session_url(&self) -> &str {
        &self.session_url
    }

    pub fn retry_counter(&self) -> u64 {
        self.retry_counter
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Id of the browser view that should be mounted, if any.
    pub fn current_instance(&self) -> Option<InstanceId> {
        self.connected.then_some(self.instance)
    }

    pub fn pending_request(&self) -> Option<&PendingFileRequest> {
        self.pending.as_ref()
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match self.current_instance() {
            Some(instance) => Screen::Browser {
                instance,
                url: self.session_url.clone(),
            },
            None => Screen::Offline,
        };
        AppViewModel {
            status_bar: StatusBarView {
                style: StatusBarStyle::Dark,
                translucent: matches!(screen, Screen::Browser { .. }),
            },
            progress: ProgressView {
                progress: self.progress.progress(),
                visible: self.connected && self.progress.is_visible(),
            },
            screen,
            session_url: self.session_url.clone(),
            retry_count: self.retry_counter,
            upload_pending: self.pending.is_some(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_current(&self, instance: InstanceId) -> bool {
        self.current_instance() == Some(instance)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_started(&mut self, started: bool) {
        self.started = started;
        if !started {
            // The view is disposed on stop; a later start mounts a fresh one.
            self.remount();
        }
    }

    /// Returns false when the URL was already the session URL.
    pub(crate) fn set_session_url(&mut self, url: String) -> bool {
        if self.session_url == url {
            return false;
        }
        self.session_url = url;
        self.dirty = true;
        true
    }

    pub(crate) fn set_connected(&mut self, connected: bool) -> bool {
        if self.connected == connected {
            return false;
        }
        self.connected = connected;
        if connected {
            self.remount();
        } else {
            // The browser is unmounted; its picker round trip is void.
            self.pending = None;
        }
        self.dirty = true;
        true
    }

    pub(crate) fn bump_retry(&mut self) {
        self.retry_counter += 1;
        if self.connected {
            self.remount();
        }
        self.dirty = true;
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressIndicator {
        self.dirty = true;
        &mut self.progress
    }

    /// Registers a new pending request unless one is already open.
    pub(crate) fn open_request(
        &mut self,
        instance: InstanceId,
        request: FileInputRequest,
    ) -> Option<RequestId> {
        if self.pending.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(PendingFileRequest {
            request_id,
            instance,
            request,
        });
        self.dirty = true;
        Some(request_id)
    }

    /// Resolves the pending request if `request_id` still names it.
    pub(crate) fn take_request(&mut self, request_id: RequestId) -> Option<PendingFileRequest> {
        match &self.pending {
            Some(pending) if pending.request_id == request_id => {
                self.dirty = true;
                self.pending.take()
            }
            _ => None,
        }
    }

    fn remount(&mut self) {
        self.instance += 1;
        self.pending = None;
        self.progress = ProgressIndicator::new();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
