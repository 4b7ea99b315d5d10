//! Test utilities for Lambda handler testing.
//!
//! This module provides shared test infrastructure for the Lambda crates,
//! including proxy-event builders and helpers for inspecting image responses.
//!
//! # Usage
//!
//! These utilities are only available in test builds:
//!
//! ```ignore
//! use qrgen_lambda_shared::test_utils::{decode_png, proxy_event, requests};
//!
//! #[test]
//! fn test_handler() {
//!     let payload = proxy_event(Some(requests::EXAMPLE_300));
//!     // ... invoke the handler, then
//!     // let image = decode_png(&response);
//! }
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, ImageFormat};
use serde_json::{json, Value};

use qrgen_lib::QrResponse;

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Build an HTTP API (payload v2) proxy event carrying `body` as plain text.
pub fn proxy_event(body: Option<&str>) -> Value {
    json!({
        "version": "2.0",
        "routeKey": "POST /qr",
        "rawPath": "/qr",
        "headers": { "content-type": "application/json" },
        "requestContext": { "http": { "method": "POST", "path": "/qr" } },
        "body": body,
        "isBase64Encoded": false,
    })
}

/// Build a proxy event whose body the gateway has base64-encoded.
pub fn base64_proxy_event(body: &str) -> Value {
    json!({
        "version": "2.0",
        "routeKey": "POST /qr",
        "headers": { "content-type": "application/octet-stream" },
        "body": STANDARD.encode(body),
        "isBase64Encoded": true,
    })
}

/// Decode the base64 body of an image response.
///
/// # Panics
///
/// Panics if the response is not flagged as base64 or the body does not decode.
pub fn png_bytes(response: &QrResponse) -> Vec<u8> {
    assert!(
        response.is_base64_encoded,
        "expected a base64 body, got {}",
        response.body
    );
    STANDARD
        .decode(&response.body)
        .expect("response body should be valid base64")
}

/// Decode an image response into a grayscale bitmap.
pub fn decode_png(response: &QrResponse) -> GrayImage {
    image::load_from_memory_with_format(&png_bytes(response), ImageFormat::Png)
        .expect("response body should be a PNG")
        .to_luma8()
}

/// Create a mock request ID for testing.
///
/// Since `lambda_runtime::Context` is non-exhaustive and cannot be directly
/// constructed with an ID, tests should use the request ID directly for
/// assertions.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{}", suffix)
}

/// Request bodies shared across handler tests.
pub mod requests {
    /// Valid request for a 300 pixel code of `https://example.com/`.
    pub const EXAMPLE_300: &str = r#"{"url":"https%3A%2F%2Fexample.com%2F","size":300}"#;
    /// Valid request relying on the default size.
    pub const EXAMPLE_DEFAULT_SIZE: &str = r#"{"url":"https%3A%2F%2Fexample.com%2F"}"#;
    /// Request with a size below the accepted range.
    pub const SIZE_TOO_SMALL: &str = r#"{"url":"https%3A%2F%2Fexample.com%2F","size":10}"#;
    /// Request with a valid size and no url.
    pub const MISSING_URL: &str = r#"{"size":300}"#;
}
