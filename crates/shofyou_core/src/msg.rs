use crate::{FileInputRequest, InstanceId, PickedAsset, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Shell mounted by the host.
    Started,
    /// Shell torn down by the host.
    Stopped,
    /// Result of the launch-URL query; `None` when the app was not opened by a link.
    InitialUrlResolved(Option<String>),
    /// Deep link delivered while running.
    DeepLinkReceived(String),
    /// Effective reachability changed.
    ConnectivityChanged(bool),
    /// User pressed Retry on the offline screen.
    RetryClicked,
    LoadStarted {
        instance: InstanceId,
    },
    LoadProgress {
        instance: InstanceId,
        progress: f64,
    },
    LoadFinished {
        instance: InstanceId,
    },
    /// The guard refused an in-app load of `url`.
    ExternalNavigation {
        instance: InstanceId,
        url: String,
    },
    /// The page activated a file input.
    FileInputClicked {
        instance: InstanceId,
        request: FileInputRequest,
    },
    PermissionDenied {
        request_id: RequestId,
    },
    FilesPicked {
        request_id: RequestId,
        assets: Vec<PickedAsset>,
    },
    PickerCancelled {
        request_id: RequestId,
    },
}
