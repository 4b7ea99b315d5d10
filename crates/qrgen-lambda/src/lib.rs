//! AWS Lambda function for QR code generation.
//!
//! This Lambda sits behind an API Gateway (REST or HTTP API) or a Lambda
//! Function URL and turns a JSON body into a PNG QR code:
//!
//! ```json
//! { "url": "https%3A%2F%2Fwww.blah.com%2F%3Fparam1%3Dblech", "size": 200 }
//! ```
//!
//! `url` must be percent-encoded. `size` is optional, between 50 and 1000
//! pixels, and defaults to `DEFAULT_SIZE` from the environment or 200.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use qrgen_lambda_shared::{get_runtime, log_event, ProxyRequest};
use qrgen_lib::{QrError, QrHandler, QrResponse};

/// Lambda entry point: one proxy event in, one proxy response out.
///
/// Request problems are always returned as JSON error responses. The only
/// `Err` is an invocation before [`qrgen_lambda_shared::init_runtime`].
pub async fn handler(event: LambdaEvent<Value>) -> Result<QrResponse, Error> {
    let request_id = event.context.request_id.clone();
    log_event(&event.payload, &request_id);

    let runtime = get_runtime()?;
    let request = ProxyRequest::from_payload(event.payload);
    Ok(handle_proxy_request(runtime.handler(), &request, &request_id))
}

/// Core handler logic separated for reuse in tests.
pub fn handle_proxy_request(
    handler: &QrHandler,
    request: &ProxyRequest,
    request_id: &str,
) -> QrResponse {
    info!(
        request_id = %request_id,
        content_type = request.header("content-type").unwrap_or("-"),
        body_bytes = request.body.as_ref().map_or(0, String::len),
        "handling qr request"
    );

    let body = match request.decoded_body() {
        Ok(body) => body,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "failed to decode request body");
            return QrResponse::from_error(&QrError::InvalidBody);
        }
    };

    let response = handler.handle(body.as_deref());

    if response.is_success() {
        info!(
            request_id = %request_id,
            status = response.status_code,
            "qr request complete"
        );
    } else {
        warn!(
            request_id = %request_id,
            status = response.status_code,
            "qr request rejected"
        );
    }

    response
}
