//! Wire schema shared by the browser and native change-detection clients.
//!
//! This crate owns everything both front-ends must agree on with the backend:
//! endpoint paths, multipart field names, the reserved push-log payloads, the
//! `/detect-change` response body, and the GeoJSON download artifact. It has no
//! I/O of its own so it compiles unchanged for WASM and native targets.

pub mod sse;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Multipart submission endpoint.
pub const DETECT_CHANGE_PATH: &str = "/detect-change";
/// Server-sent events endpoint carrying progress lines.
pub const LOGS_PATH: &str = "/logs";
/// Multipart field holding the "before" image.
pub const BEFORE_FIELD: &str = "before";
/// Multipart field holding the "after" image.
pub const AFTER_FIELD: &str = "after";
/// Keepalive payload the backend emits while its log queue is empty.
pub const IDLE_MARKER: &str = ".";
/// Authoritative end-of-stream payload.
pub const DONE_SENTINEL: &str = "__ANALYSIS_DONE__";
/// File name offered for the GeoJSON download.
pub const GEOJSON_FILE_NAME: &str = "change_output.geojson";
/// Content type of the GeoJSON download.
pub const GEOJSON_MIME: &str = "application/json";

/// Error returned when decoding backend payloads.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A preview image was not valid standard base64.
    #[error("invalid base64 preview: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The response body was not the expected JSON document.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// One payload received on the push-log stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamMessage {
    /// Keepalive; carries no content.
    Idle,
    /// End of the analysis run.
    Done,
    /// Free-text progress line.
    Line(String),
}

impl StreamMessage {
    /// Classify a raw payload. Reserved payloads match exactly, without trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            IDLE_MARKER => Self::Idle,
            DONE_SENTINEL => Self::Done,
            other => Self::Line(other.to_owned()),
        }
    }
}

/// Pixel counters reported by the backend alongside a successful result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    #[serde(default)]
    pub pixel_changed_pixels: u64,
    #[serde(default)]
    pub texture_confirmed_pixels: u64,
}

/// Body of a `/detect-change` response.
///
/// Every key is optional; the backend sends the same shape for `200` and
/// `500` responses, so callers parse it regardless of HTTP status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectResponse {
    /// Informational only; any JSON value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geojson: Option<Value>,
    /// Counters are optional extras; a malformed value reads as absent.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stats: Option<ChangeStats>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

impl DetectResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Json`] when the body is not a JSON object of
    /// the expected shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Backend error message, if one was reported. Empty strings count as absent.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    #[must_use]
    pub fn before_image(&self) -> Option<PreviewImage> {
        PreviewImage::from_field(self.before_preview.as_deref())
    }

    #[must_use]
    pub fn after_image(&self) -> Option<PreviewImage> {
        PreviewImage::from_field(self.after_preview.as_deref())
    }

    /// GeoJSON document, if present and not a falsy scalar (`null`, `false`,
    /// `0`, `""`).
    #[must_use]
    pub fn geojson_document(&self) -> Option<&Value> {
        self.geojson.as_ref().filter(|value| is_truthy(value))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Base64-encoded PNG preview returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewImage {
    base64: String,
}

impl PreviewImage {
    #[must_use]
    pub fn new(base64: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
        }
    }

    fn from_field(field: Option<&str>) -> Option<Self> {
        field.filter(|encoded| !encoded.is_empty()).map(Self::new)
    }

    /// Inline `data:` URL suitable for an `<img src>`.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }

    /// Decode the PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Base64`] when the payload is not standard base64.
    pub fn decode(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(STANDARD.decode(self.base64.as_bytes())?)
    }
}

/// Render a JSON document with 2-space indentation.
#[must_use]
pub fn pretty_json(document: &Value) -> String {
    // Serializing a `Value` cannot fail; fall back to compact output regardless.
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}

/// A file the user can save locally without a network round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub body: String,
}

impl Download {
    /// The GeoJSON result artifact, from already pretty-printed text.
    #[must_use]
    pub fn geojson(body: impl Into<String>) -> Self {
        Self {
            file_name: GEOJSON_FILE_NAME,
            mime: GEOJSON_MIME,
            body: body.into(),
        }
    }
}
