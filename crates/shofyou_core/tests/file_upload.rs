use std::time::Duration;

use shofyou_core::{
    selected_files, update, AppState, BridgeError, BridgeMessage, Effect, FileInputRequest,
    MediaKind, Msg, PickedAsset, PickerOptions, Screen, SelectedFile, PERMISSION_DENIED_MESSAGE,
};

fn init_logging() {
    shell_logging::initialize_for_tests();
}

fn started() -> (AppState, u64) {
    let (state, _) = update(AppState::new(), Msg::Started);
    let instance = match state.view().screen {
        Screen::Browser { instance, .. } => instance,
        Screen::Offline => panic!("expected browser screen"),
    };
    (state, instance)
}

fn click(state: AppState, instance: u64) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FileInputClicked {
            instance,
            request: FileInputRequest {
                accept: "image/*".to_string(),
                multiple: true,
            },
        },
    )
}

fn request_id_of(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::RequestFileSelection { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("file selection effect")
}

fn asset(uri: &str, kind: MediaKind, name: Option<&str>) -> PickedAsset {
    PickedAsset {
        uri: uri.to_string(),
        kind,
        file_name: name.map(ToOwned::to_owned),
    }
}

#[test]
fn parses_file_input_click() {
    let message =
        BridgeMessage::parse(r#"{"type":"FILE_INPUT_CLICK","accept":"image/*,video/*","multiple":true}"#)
            .expect("valid message");

    assert_eq!(
        message,
        BridgeMessage::FileInputClick(FileInputRequest {
            accept: "image/*,video/*".to_string(),
            multiple: true,
        })
    );
}

#[test]
fn file_input_click_fields_default_when_absent() {
    let message = BridgeMessage::parse(r#"{"type":"FILE_INPUT_CLICK"}"#).expect("valid message");
    assert_eq!(
        message,
        BridgeMessage::FileInputClick(FileInputRequest::default())
    );
}

#[test]
fn unknown_message_type_is_reported_as_other() {
    let message = BridgeMessage::parse(r#"{"type":"SCROLL","y":10}"#).expect("valid message");
    assert_eq!(message, BridgeMessage::Other("SCROLL".to_string()));
}

#[test]
fn malformed_messages_are_rejected() {
    assert!(matches!(
        BridgeMessage::parse("not json"),
        Err(BridgeError::InvalidJson(_))
    ));
    assert!(matches!(
        BridgeMessage::parse(r#"{"accept":"image/*"}"#),
        Err(BridgeError::MissingType)
    ));
    assert!(matches!(
        BridgeMessage::parse(r#"{"type":7}"#),
        Err(BridgeError::MissingType)
    ));
    assert!(matches!(
        BridgeMessage::parse("[1,2]"),
        Err(BridgeError::MissingType)
    ));
    assert!(matches!(
        BridgeMessage::parse(r#"{"type":"FILE_INPUT_CLICK","multiple":"yes"}"#),
        Err(BridgeError::MalformedFields { .. })
    ));
}

#[test]
fn picker_defaults_match_upload_requirements() {
    let options = PickerOptions::default();
    assert_eq!(options.media, vec![MediaKind::Image, MediaKind::Video]);
    assert!(options.allow_multiple);
    assert_eq!(options.quality, 1.0);
    assert_eq!(options.video_max_duration, Duration::from_secs(300));
}

#[test]
fn selected_files_fall_back_to_upload_name() {
    let files = selected_files(&[
        asset("file:///a.jpg", MediaKind::Image, Some("a.jpg")),
        asset("file:///b.mp4", MediaKind::Video, None),
        asset("file:///c.png", MediaKind::Image, Some("")),
        asset("  ", MediaKind::Image, Some("ghost.png")),
    ]);

    assert_eq!(
        files,
        vec![
            SelectedFile {
                uri: "file:///a.jpg".to_string(),
                kind: MediaKind::Image,
                name: "a.jpg".to_string(),
            },
            SelectedFile {
                uri: "file:///b.mp4".to_string(),
                kind: MediaKind::Video,
                name: "upload".to_string(),
            },
            SelectedFile {
                uri: "file:///c.png".to_string(),
                kind: MediaKind::Image,
                name: "upload".to_string(),
            },
        ]
    );
}

#[test]
fn selected_file_serializes_wire_names() {
    let file = SelectedFile {
        uri: "file:///a.jpg".to_string(),
        kind: MediaKind::Image,
        name: "a.jpg".to_string(),
    };
    let json = serde_json::to_value(&file).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"uri": "file:///a.jpg", "type": "image", "name": "a.jpg"})
    );
}

#[test]
fn two_picked_assets_dispatch_two_files() {
    init_logging();
    let (state, instance) = started();
    let (state, effects) = click(state, instance);
    let request_id = request_id_of(&effects);
    assert!(state.view().upload_pending);

    let (state, effects) = update(
        state,
        Msg::FilesPicked {
            request_id,
            assets: vec![
                asset("file:///one.jpg", MediaKind::Image, Some("one.jpg")),
                asset("file:///two.mov", MediaKind::Video, None),
            ],
        },
    );

    match effects.as_slice() {
        [Effect::DispatchFileSelected {
            instance: target,
            files,
        }] => {
            assert_eq!(*target, instance);
            assert_eq!(files.len(), 2);
            assert!(files.iter().all(|file| !file.uri.is_empty()));
            assert_eq!(files[1].name, "upload");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
    assert!(state.pending_request().is_none());
}

#[test]
fn cancelled_picker_dispatches_nothing() {
    init_logging();
    let (state, instance) = started();
    let (state, effects) = click(state, instance);
    let request_id = request_id_of(&effects);

    let (state, effects) = update(state, Msg::PickerCancelled { request_id });
    assert!(effects.is_empty());
    assert!(state.pending_request().is_none());
}

#[test]
fn empty_selection_dispatches_nothing() {
    init_logging();
    let (state, instance) = started();
    let (state, effects) = click(state, instance);
    let request_id = request_id_of(&effects);

    let (_state, effects) = update(
        state,
        Msg::FilesPicked {
            request_id,
            assets: Vec::new(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn permission_denied_alerts_without_injection() {
    init_logging();
    let (state, instance) = started();
    let (state, effects) = click(state, instance);
    let request_id = request_id_of(&effects);

    let (state, effects) = update(state, Msg::PermissionDenied { request_id });
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            message: PERMISSION_DENIED_MESSAGE.to_string(),
        }]
    );

    // The user can try again right away.
    let (_state, effects) = click(state, instance);
    assert_eq!(request_id_of(&effects), request_id + 1);
}

#[test]
fn overlapping_click_is_dropped() {
    init_logging();
    let (state, instance) = started();
    let (state, effects) = click(state, instance);
    let first = request_id_of(&effects);

    let (state, effects) = click(state, instance);
    assert!(effects.is_empty());
    assert_eq!(state.pending_request().map(|p| p.request_id), Some(first));
}

#[test]
fn picker_result_after_remount_is_discarded() {
    init_logging();
    let (state, instance) = started();
    let (state, effects) = click(state, instance);
    let request_id = request_id_of(&effects);

    let (state, _) = update(state, Msg::RetryClicked);
    assert!(state.pending_request().is_none());

    let (_state, effects) = update(
        state,
        Msg::FilesPicked {
            request_id,
            assets: vec![asset("file:///late.jpg", MediaKind::Image, None)],
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn click_from_stale_instance_is_ignored() {
    init_logging();
    let (state, instance) = started();
    let (state, _) = update(state, Msg::RetryClicked);

    let (state, effects) = click(state, instance);
    assert!(effects.is_empty());
    assert!(state.pending_request().is_none());
}
