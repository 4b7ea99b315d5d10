//! Lambda runtime initialization.
//!
//! This module provides a process-wide singleton holding the resolved
//! [`QrConfig`] and the [`QrHandler`] built from it. It is initialized once at
//! cold start, before `lambda_runtime::run`, and read by every invocation.
//!
//! # Configuration
//!
//! - `DEFAULT_SIZE`: default QR size in pixels (optional, integer). A value
//!   that is not an integer fails initialization.

use std::sync::OnceLock;

use tracing::{info, warn};

use qrgen_lib::{ConfigError, QrConfig, QrHandler, MAX_SIZE, MIN_SIZE};

/// Lazily-initialized Lambda runtime state.
static RUNTIME: OnceLock<LambdaRuntime> = OnceLock::new();

/// Error during runtime initialization or access.
#[derive(Debug, Clone)]
pub struct InitError {
    pub message: String,
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lambda initialization failed: {}", self.message)
    }
}

impl std::error::Error for InitError {}

impl From<ConfigError> for InitError {
    fn from(err: ConfigError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Initialized Lambda runtime containing the shared QR handler.
///
/// This struct is designed to be initialized once at cold start and reused
/// across all invocations.
#[derive(Debug)]
pub struct LambdaRuntime {
    handler: QrHandler,
}

impl LambdaRuntime {
    /// Access the shared request handler.
    pub fn handler(&self) -> &QrHandler {
        &self.handler
    }

    /// Access the resolved configuration.
    pub fn config(&self) -> &QrConfig {
        self.handler.config()
    }
}

/// Initialize the Lambda runtime from resolved configuration.
///
/// Only the first call takes effect; later calls return the runtime created
/// by the first one and log that their configuration was ignored.
pub fn init_runtime(config: QrConfig) -> &'static LambdaRuntime {
    let mut created = false;
    let runtime = RUNTIME.get_or_init(|| {
        created = true;
        info!(default_size = config.default_size, "initializing Lambda runtime");

        if !config.default_size_in_range() {
            warn!(
                default_size = config.default_size,
                min_size = MIN_SIZE,
                max_size = MAX_SIZE,
                "default size is outside the accepted range; requests without a size will be rejected"
            );
        }

        LambdaRuntime {
            handler: QrHandler::new(config),
        }
    });

    if !created && runtime.config() != &config {
        warn!(
            active_default_size = runtime.config().default_size,
            ignored_default_size = config.default_size,
            "Lambda runtime already initialized; ignoring new configuration"
        );
    }

    runtime
}

/// Get the initialized runtime.
///
/// Returns an error if `init_runtime` has not been called, so an invocation
/// that races cold start fails instead of panicking.
pub fn get_runtime() -> Result<&'static LambdaRuntime, InitError> {
    RUNTIME.get().ok_or_else(|| InitError {
        message: "Lambda runtime not initialized. Call init_runtime() first.".to_string(),
    })
}
