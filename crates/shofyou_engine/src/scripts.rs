//! Scripts exchanged with the page over the file-upload bridge.

use shofyou_core::{SelectedFile, FILE_INPUT_CLICK, FILE_SELECTED_EVENT};

/// Page-side call that posts a string to the native message handler.
pub const DEFAULT_POST_MESSAGE: &str = "window.ipc.postMessage";

const FILE_INPUT_HOOK: &str = r#"(function() {
  if (window.__shofyouFileHook) {
    return;
  }
  window.__shofyouFileHook = true;

  function post(input) {
    __POST_MESSAGE__(JSON.stringify({
      type: '__MESSAGE_TYPE__',
      accept: input.accept || '',
      multiple: !!input.multiple
    }));
  }

  const originalInputClick = HTMLInputElement.prototype.click;
  HTMLInputElement.prototype.click = function() {
    if (this.type === 'file') {
      post(this);
      return;
    }
    originalInputClick.call(this);
  };

  document.addEventListener('click', function(e) {
    const target = e.target;
    if (target && target.tagName === 'INPUT' && target.type === 'file') {
      e.preventDefault();
      post(target);
    }
  }, true);
})();
true;
"#;

/// Script injected into every page. Replaces the file chooser of
/// `<input type="file">` (programmatic `click()` and real clicks, including
/// inputs added later) with a `FILE_INPUT_CLICK` bridge message.
///
/// Installs at most once per document.
pub fn file_input_hook(post_message: &str) -> String {
    FILE_INPUT_HOOK
        .replace("__POST_MESSAGE__", post_message)
        .replace("__MESSAGE_TYPE__", FILE_INPUT_CLICK)
}

/// Script that dispatches `fileSelected` on `document` with `files` as detail.
pub fn file_selected_script(files: &[SelectedFile]) -> Result<String, serde_json::Error> {
    // JSON is a JS expression except for the two line separators.
    let detail = serde_json::to_string(files)?
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029");
    Ok(format!(
        "(function() {{\n  const event = new CustomEvent('{FILE_SELECTED_EVENT}', {{\n    detail: {detail}\n  }});\n  document.dispatchEvent(event);\n}})();\ntrue;\n"
    ))
}
