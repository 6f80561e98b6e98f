use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use shell_logging::{shell_debug, shell_error, shell_info};
use shofyou_core::{PickedAsset, PickerOptions, RequestId};
use thiserror::Error;

use crate::{MediaLibrary, MediaPermission};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("permission request failed: {0}")]
    Permission(String),
    #[error("media picker failed: {0}")]
    Launch(String),
    #[error("picker worker is not running")]
    WorkerGone,
}

/// Outcome of one file-selection round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    PermissionDenied {
        request_id: RequestId,
    },
    Picked {
        request_id: RequestId,
        assets: Vec<PickedAsset>,
    },
    Cancelled {
        request_id: RequestId,
    },
    Failed {
        request_id: RequestId,
        error: PickerError,
    },
}

impl PickerEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            PickerEvent::PermissionDenied { request_id }
            | PickerEvent::Picked { request_id, .. }
            | PickerEvent::Cancelled { request_id }
            | PickerEvent::Failed { request_id, .. } => *request_id,
        }
    }
}

enum PickerCommand {
    Pick { request_id: RequestId },
}

/// Runs media-library round trips off the UI thread.
///
/// Requests go in with [`PickerHandle::request`]; results come back through
/// [`PickerHandle::try_recv`], to be drained on the UI thread.
pub struct PickerHandle {
    cmd_tx: mpsc::Sender<PickerCommand>,
    event_rx: mpsc::Receiver<PickerEvent>,
}

impl PickerHandle {
    pub fn new(library: Arc<dyn MediaLibrary>, options: PickerOptions) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    shell_error!("Failed to start media picker runtime: {}", err);
                    return;
                }
            };
            let options = Arc::new(options);
            while let Ok(command) = cmd_rx.recv() {
                let library = library.clone();
                let options = options.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    match command {
                        PickerCommand::Pick { request_id } => {
                            let event = pick_files(library.as_ref(), &options, request_id).await;
                            let _ = event_tx.send(event);
                        }
                    }
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn request(&self, request_id: RequestId) -> Result<(), PickerError> {
        shell_debug!("Queueing media picker request {}", request_id);
        self.cmd_tx
            .send(PickerCommand::Pick { request_id })
            .map_err(|_| PickerError::WorkerGone)
    }

    pub fn try_recv(&self) -> Option<PickerEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<PickerEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// Permission check followed by the picker. Never times out.
pub async fn pick_files(
    library: &dyn MediaLibrary,
    options: &PickerOptions,
    request_id: RequestId,
) -> PickerEvent {
    match library.request_permission().await {
        Ok(MediaPermission::Granted) => {}
        Ok(MediaPermission::Denied) => {
            shell_info!("Media library permission denied for request {}", request_id);
            return PickerEvent::PermissionDenied { request_id };
        }
        Err(err) => {
            return PickerEvent::Failed {
                request_id,
                error: PickerError::Permission(err.to_string()),
            };
        }
    }

    match library.pick(options).await {
        Ok(Some(assets)) => {
            shell_info!(
                "Media picker returned {} asset(s) for request {}",
                assets.len(),
                request_id
            );
            PickerEvent::Picked { request_id, assets }
        }
        Ok(None) => PickerEvent::Cancelled { request_id },
        Err(err) => PickerEvent::Failed {
            request_id,
            error: PickerError::Launch(err.to_string()),
        },
    }
}
