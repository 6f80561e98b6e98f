use crate::{FileInputRequest, InstanceId, RequestId, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the process-wide window background. Idempotent.
    ApplySystemBackground,
    SubscribeDeepLinks,
    UnsubscribeDeepLinks,
    ResolveInitialUrl,
    /// Re-read the connectivity monitor and report it back.
    RefreshConnectivity,
    StopLoading {
        instance: InstanceId,
    },
    OpenExternal {
        url: String,
    },
    RequestFileSelection {
        request_id: RequestId,
        instance: InstanceId,
        request: FileInputRequest,
    },
    ShowAlert {
        message: String,
    },
    DispatchFileSelected {
        instance: InstanceId,
        files: Vec<SelectedFile>,
    },
}
