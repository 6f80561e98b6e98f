//! Shofyou core: pure shell state machine, navigation guard and bridge payloads.
mod bridge;
mod effect;
mod guard;
mod msg;
mod progress;
mod state;
mod update;
mod view_model;

pub use bridge::{
    selected_files, BridgeError, BridgeMessage, FileInputRequest, MediaKind, PickedAsset,
    PickerOptions, SelectedFile, DEFAULT_UPLOAD_NAME, FILE_INPUT_CLICK, FILE_SELECTED_EVENT,
    PERMISSION_DENIED_MESSAGE,
};
pub use effect::Effect;
pub use guard::{DomainMatch, NavigationDecision, NavigationGuard, CANONICAL_DOMAIN, CANONICAL_URL};
pub use msg::Msg;
pub use progress::{ProgressIndicator, LOAD_START_PROGRESS};
pub use state::{AppState, InstanceId, PendingFileRequest, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, ProgressView, Screen, StatusBarStyle, StatusBarView};
