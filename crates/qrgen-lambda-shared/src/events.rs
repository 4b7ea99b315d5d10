//! API Gateway / Function URL proxy events.
//!
//! Only the fields the QR handler consumes are modeled; everything else in the
//! event is ignored. Every modeled field tolerates being absent or `null`,
//! since REST APIs, HTTP APIs and Function URLs disagree on which ones they
//! send.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Inbound proxy event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// Raw request body.
    #[serde(default)]
    pub body: Option<String>,

    /// Whether the gateway base64-encoded `body`.
    #[serde(default)]
    pub is_base64_encoded: Option<bool>,

    /// Request headers.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

/// Error decoding a base64-encoded event body.
#[derive(Debug)]
pub enum BodyDecodeError {
    /// The body was flagged as base64 but was not.
    Base64(base64::DecodeError),

    /// The decoded bytes were not UTF-8 text.
    Utf8(std::string::FromUtf8Error),
}

impl std::fmt::Display for BodyDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(e) => write!(f, "body is not valid base64: {}", e),
            Self::Utf8(e) => write!(f, "body is not valid UTF-8: {}", e),
        }
    }
}

impl std::error::Error for BodyDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(e) => Some(e),
            Self::Utf8(e) => Some(e),
        }
    }
}

impl ProxyRequest {
    /// Parse a raw Lambda payload.
    ///
    /// Payloads that are not proxy events (not an object, or a non-string
    /// `body`) are treated as events without a body.
    pub fn from_payload(payload: serde_json::Value) -> Self {
        serde_json::from_value(payload).unwrap_or_else(|e| {
            warn!(error = %e, "payload is not a proxy event; treating as empty");
            Self::default()
        })
    }

    /// Create an event carrying a plain-text body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// The body as text, base64-decoding it when the gateway flagged it.
    pub fn decoded_body(&self) -> Result<Option<String>, BodyDecodeError> {
        let Some(body) = self.body.as_deref() else {
            return Ok(None);
        };

        if !self.is_base64_encoded.unwrap_or(false) {
            return Ok(Some(body.to_string()));
        }

        let bytes = STANDARD.decode(body).map_err(BodyDecodeError::Base64)?;
        String::from_utf8(bytes)
            .map(Some)
            .map_err(BodyDecodeError::Utf8)
    }

    /// Look up a header case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Log the serialized inbound event for diagnostics.
///
/// Best-effort: a serialization failure is logged as a warning and the
/// request continues.
pub fn log_event<T: Serialize + ?Sized>(event: &T, request_id: &str) {
    match serde_json::to_string(event) {
        Ok(input) => info!(request_id = %request_id, input = %input, "received event"),
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "failed to serialize event for logging")
        }
    }
}
