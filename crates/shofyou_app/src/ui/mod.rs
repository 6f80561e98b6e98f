pub mod constants;
pub mod progress;
pub mod render;

pub use progress::{ProgressAnimator, ProgressFrame};
pub use render::{OfflineScreen, SurfaceCommand};

/// Native chrome around the browser: offline screen, status bar, progress bar.
pub trait ShellSurface {
    fn apply(&mut self, command: SurfaceCommand);
}
