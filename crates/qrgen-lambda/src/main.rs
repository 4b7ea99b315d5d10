//! AWS Lambda function for QR code generation.
//!
//! Resolves configuration once at cold start, then serves every invocation
//! with the shared handler.

use lambda_runtime::{service_fn, Error};
use tracing::{error, info};

use qrgen_lambda::handler;
use qrgen_lambda_shared::{init_runtime, init_tracing, InitError};
use qrgen_lib::QrConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // A malformed DEFAULT_SIZE fails the init phase instead of every request
    let config = QrConfig::from_env().map_err(|e| {
        let err = InitError::from(e);
        error!(error = %err, "invalid configuration");
        err
    })?;

    let runtime = init_runtime(config);
    info!(
        default_size = runtime.config().default_size,
        "qr lambda ready"
    );

    lambda_runtime::run(service_fn(handler)).await
}
