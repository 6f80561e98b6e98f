use crate::bridge::selected_files;
use crate::{AppState, Effect, Msg, PERMISSION_DENIED_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.is_started() {
                return (state, Vec::new());
            }
            state.set_started(true);
            state.mark_dirty();
            vec![
                Effect::ApplySystemBackground,
                Effect::SubscribeDeepLinks,
                Effect::ResolveInitialUrl,
            ]
        }
        Msg::Stopped => {
            if !state.is_started() {
                return (state, Vec::new());
            }
            state.set_started(false);
            state.mark_dirty();
            vec![Effect::UnsubscribeDeepLinks]
        }
        Msg::InitialUrlResolved(Some(url)) | Msg::DeepLinkReceived(url) => {
            if state.guard().is_in_app(&url) {
                state.set_session_url(url);
            }
            Vec::new()
        }
        Msg::InitialUrlResolved(None) => Vec::new(),
        Msg::ConnectivityChanged(connected) => {
            state.set_connected(connected);
            Vec::new()
        }
        Msg::RetryClicked => {
            state.bump_retry();
            vec![Effect::RefreshConnectivity]
        }
        Msg::LoadStarted { instance } => {
            if state.is_current(instance) {
                state.progress_mut().start();
            }
            Vec::new()
        }
        Msg::LoadProgress { instance, progress } => {
            if state.is_current(instance) {
                state.progress_mut().advance(progress);
            }
            Vec::new()
        }
        Msg::LoadFinished { instance } => {
            if state.is_current(instance) {
                state.progress_mut().finish();
            }
            Vec::new()
        }
        Msg::ExternalNavigation { instance, url } => {
            if !state.is_current(instance) || state.guard().is_in_app(&url) {
                return (state, Vec::new());
            }
            vec![Effect::StopLoading { instance }, Effect::OpenExternal { url }]
        }
        Msg::FileInputClicked { instance, request } => {
            if !state.is_current(instance) {
                return (state, Vec::new());
            }
            // Overlapping activations are dropped while a picker is open.
            match state.open_request(instance, request.clone()) {
                Some(request_id) => vec![Effect::RequestFileSelection {
                    request_id,
                    instance,
                    request,
                }],
                None => Vec::new(),
            }
        }
        Msg::PermissionDenied { request_id } => match state.take_request(request_id) {
            Some(_) => vec![Effect::ShowAlert {
                message: PERMISSION_DENIED_MESSAGE.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::FilesPicked { request_id, assets } => match state.take_request(request_id) {
            Some(pending) => {
                let files = selected_files(&assets);
                if files.is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::DispatchFileSelected {
                        instance: pending.instance,
                        files,
                    }]
                }
            }
            None => Vec::new(),
        },
        Msg::PickerCancelled { request_id } => {
            state.take_request(request_id);
            Vec::new()
        }
    };

    (state, effects)
}
