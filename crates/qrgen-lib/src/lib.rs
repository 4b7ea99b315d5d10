//! qrgen library entry points.
//!
//! This crate turns an untrusted JSON request body into either a base64 PNG
//! QR code or a structured JSON error. Higher-level consumers (the Lambda
//! function) should only depend on the items exported here instead of
//! reimplementing validation or response shaping.
//!
//! The pipeline for a single request is:
//!
//! ```text
//! body ─► QrRequest::parse ─► QrRequest::resolve(config) ─► percent decode
//!      ─► MatrixEncoder::encode ─► ImageWriter::write_png ─► QrResponse
//! ```

#![deny(warnings)]

pub mod config;
pub mod decode;
pub mod encoder;
pub mod error;
pub mod handler;
pub mod render;
pub mod request;
pub mod response;

pub use config::{ConfigError, QrConfig, DEFAULT_SIZE, DEFAULT_SIZE_ENV, MAX_SIZE, MIN_SIZE};
pub use decode::decode_url;
pub use encoder::{BitMatrix, MatrixEncoder, QrMatrixEncoder, QUIET_ZONE};
pub use error::{QrError, Result};
pub use handler::{handle, QrHandler};
pub use render::{ImageWriter, PngWriter};
pub use request::{Field, QrJob, QrRequest};
pub use response::{
    error_response, image_response, QrResponse, CONTENT_TYPE, CONTENT_TYPE_JSON, CONTENT_TYPE_PNG,
};
