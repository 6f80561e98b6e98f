/// Progress shown as soon as a navigation starts, before the engine reports any.
pub const LOAD_START_PROGRESS: f64 = 0.1;

/// Load progress of the mounted browser view. Visible iff loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressIndicator {
    progress: f64,
    loading: bool,
}

impl ProgressIndicator {
    /// State of a freshly mounted view: loading, nothing reported yet.
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            loading: true,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_visible(&self) -> bool {
        self.loading
    }

    pub fn start(&mut self) {
        self.loading = true;
        self.progress = LOAD_START_PROGRESS;
    }

    /// Returns false when the value was rejected (not finite).
    pub fn advance(&mut self, progress: f64) -> bool {
        if !progress.is_finite() {
            return false;
        }
        self.progress = progress.clamp(0.0, 1.0);
        true
    }

    pub fn finish(&mut self) {
        self.loading = false;
        self.progress = 1.0;
    }
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new()
    }
}
