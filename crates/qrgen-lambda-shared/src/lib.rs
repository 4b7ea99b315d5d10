//! Shared infrastructure for the qrgen AWS Lambda function.
//!
//! This crate provides the Lambda-specific glue around `qrgen-lib`:
//!
//! - [`LambdaRuntime`]: Configuration and handler resolved once at cold start
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//! - [`ProxyRequest`]: API Gateway / Function URL proxy event, with body decoding
//! - [`log_event`]: Best-effort diagnostic logging of the inbound event
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides proxy-event builders and PNG helpers for
//! Lambda handler testing. Enable the `test-utils` feature to access it from
//! dependent crates.

#![deny(warnings)]

mod events;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use events::{log_event, BodyDecodeError, ProxyRequest};
pub use runtime::{get_runtime, init_runtime, InitError, LambdaRuntime};
pub use tracing_init::init_tracing;
