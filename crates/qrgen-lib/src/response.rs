//! Response shaping for the API Gateway proxy integration.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::QrError;

/// Header carrying the response media type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type of error responses.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type of image responses.
pub const CONTENT_TYPE_PNG: &str = "image/png";

/// A complete response: either a base64 PNG or a JSON error document.
///
/// Field names follow the API Gateway / Function URL proxy response format,
/// so this serializes directly as the Lambda return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    /// HTTP status code.
    pub status_code: u16,

    /// Response headers.
    pub headers: BTreeMap<String, String>,

    /// Literal JSON text, or base64 text when `is_base64_encoded` is set.
    pub body: String,

    /// Whether `body` is base64-encoded binary.
    pub is_base64_encoded: bool,
}

impl QrResponse {
    fn new(status: StatusCode, content_type: &str, body: String, is_base64_encoded: bool) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: BTreeMap::from([(CONTENT_TYPE.to_string(), content_type.to_string())]),
            body,
            is_base64_encoded,
        }
    }

    /// Build the JSON error response for a request failure.
    pub fn from_error(err: &QrError) -> Self {
        let body = serde_json::json!({ "error": err.to_string() });
        error_response(body.to_string(), err.status())
    }

    /// Value of the `Content-Type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).map(String::as_str)
    }

    /// Whether this response carries an image.
    pub fn is_success(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }
}

impl From<QrError> for QrResponse {
    fn from(err: QrError) -> Self {
        Self::from_error(&err)
    }
}

/// Wrap already-formed JSON text as an error response.
pub fn error_response(json: impl Into<String>, status: StatusCode) -> QrResponse {
    QrResponse::new(status, CONTENT_TYPE_JSON, json.into(), false)
}

/// Wrap PNG bytes as a successful base64 image response.
pub fn image_response(png: &[u8]) -> QrResponse {
    QrResponse::new(StatusCode::OK, CONTENT_TYPE_PNG, STANDARD.encode(png), true)
}
