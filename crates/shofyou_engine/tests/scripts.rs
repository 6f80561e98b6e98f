use pretty_assertions::assert_eq;
use shofyou_core::{MediaKind, SelectedFile};
use shofyou_engine::{file_input_hook, file_selected_script, DEFAULT_POST_MESSAGE};

#[test]
fn hook_posts_file_input_clicks_through_bridge() {
    let script = file_input_hook(DEFAULT_POST_MESSAGE);

    assert!(script.contains("window.ipc.postMessage(JSON.stringify({"));
    assert!(script.contains("type: 'FILE_INPUT_CLICK'"));
    assert!(script.contains("HTMLInputElement.prototype.click = function()"));
    assert!(script.contains("document.addEventListener('click'"));
    assert!(script.contains("}, true);"));
    assert!(!script.contains("__POST_MESSAGE__"));
    assert!(!script.contains("__MESSAGE_TYPE__"));
}

#[test]
fn hook_guards_against_double_install() {
    let script = file_input_hook("window.ReactNativeWebView.postMessage");
    assert!(script.starts_with("(function() {\n  if (window.__shofyouFileHook) {"));
    assert!(script.contains("window.ReactNativeWebView.postMessage(JSON.stringify"));
}

#[test]
fn file_selected_script_dispatches_custom_event() {
    let files = vec![
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
    ];

    let script = file_selected_script(&files).unwrap();

    assert_eq!(
        script,
        concat!(
            "(function() {\n",
            "  const event = new CustomEvent('fileSelected', {\n",
            "    detail: [{\"uri\":\"file:///a.jpg\",\"type\":\"image\",\"name\":\"a.jpg\"},",
            "{\"uri\":\"file:///b.mp4\",\"type\":\"video\",\"name\":\"upload\"}]\n",
            "  });\n",
            "  document.dispatchEvent(event);\n",
            "})();\n",
            "true;\n",
        )
    );
}

#[test]
fn file_selected_script_escapes_line_separators() {
    let files = vec![SelectedFile {
        uri: "file:///x.jpg".to_string(),
        kind: MediaKind::Image,
        name: "a\u{2028}b'c".to_string(),
    }];

    let script = file_selected_script(&files).unwrap();
    assert!(!script.contains('\u{2028}'));
    assert!(script.contains("a\\u2028b'c"));
}
