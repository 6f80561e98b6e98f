//! Wire formats for the page <-> native file-upload bridge.
//!
//! Page to native: `{"type":"FILE_INPUT_CLICK","accept":"image/*","multiple":true}`.
//! Native to page: a `fileSelected` DOM event whose detail is a list of
//! [`SelectedFile`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const FILE_INPUT_CLICK: &str = "FILE_INPUT_CLICK";
pub const FILE_SELECTED_EVENT: &str = "fileSelected";
/// Name reported for an asset the picker could not name.
pub const DEFAULT_UPLOAD_NAME: &str = "upload";
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Sorry, we need camera roll permissions to upload files!";

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge message is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("bridge message has no string `type` field")]
    MissingType,
    #[error("bridge message {kind} has malformed fields: {source}")]
    MalformedFields {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File-input activation reported by the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputRequest {
    /// The input's `accept` attribute, verbatim.
    pub accept: String,
    pub multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeMessage {
    FileInputClick(FileInputRequest),
    /// Well-formed message of a type the shell does not handle.
    Other(String),
}

impl BridgeMessage {
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        let value: Value = serde_json::from_str(raw)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(BridgeError::MissingType)?
            .to_string();

        if kind != FILE_INPUT_CLICK {
            return Ok(BridgeMessage::Other(kind));
        }

        let request = serde_json::from_value::<FileInputRequest>(value)
            .map_err(|source| BridgeError::MalformedFields { kind, source })?;
        Ok(BridgeMessage::FileInputClick(request))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Fixed media-library picker configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub media: Vec<MediaKind>,
    pub allow_multiple: bool,
    /// 1.0 means no compression.
    pub quality: f32,
    pub video_max_duration: Duration,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            media: vec![MediaKind::Image, MediaKind::Video],
            allow_multiple: true,
            quality: 1.0,
            video_max_duration: Duration::from_secs(300),
        }
    }
}

/// One asset returned by the media-library picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedAsset {
    pub uri: String,
    pub kind: MediaKind,
    pub file_name: Option<String>,
}

/// Entry of the `fileSelected` event detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: String,
}

/// Maps picker assets to event entries. Assets without a location are
/// skipped since the page cannot upload them.
pub fn selected_files(assets: &[PickedAsset]) -> Vec<SelectedFile> {
    assets
        .iter()
        .filter(|asset| !asset.uri.trim().is_empty())
        .map(|asset| SelectedFile {
            uri: asset.uri.clone(),
            kind: asset.kind,
            name: asset
                .file_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_UPLOAD_NAME)
                .to_string(),
        })
        .collect()
}
