//! Tracing initialization for the Lambda function.
//!
//! Every log line is a single flattened JSON object, so CloudWatch Logs
//! Insights can filter on `request_id`, `status` and `size` directly.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the process-wide JSON subscriber.
///
/// Cold start order in `main` is: this function, then
/// `QrConfig::from_env`, then [`crate::init_runtime`]. Installing the
/// subscriber first means a rejected `DEFAULT_SIZE` and the out-of-range
/// warning from `init_runtime` both reach CloudWatch before the init phase
/// ends.
///
/// `RUST_LOG` selects the filter (for example `qrgen_lib=debug`); anything
/// unset or unparsable falls back to `info`. Span context is omitted because
/// the handlers log flat events with the request id as a field.
///
/// # Example
///
/// ```no_run
/// use qrgen_lambda_shared::init_tracing;
///
/// init_tracing();
/// tracing::info!("cold start");
/// ```
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_current_span(false)
        .flatten_event(true);

    // Tests may call this more than once; the first subscriber stays.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
