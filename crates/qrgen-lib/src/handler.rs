//! Request handling: one body in, one response out.

use tracing::{debug, error, info, warn};

use crate::config::QrConfig;
use crate::encoder::{MatrixEncoder, QrMatrixEncoder};
use crate::error::Result;
use crate::render::{ImageWriter, PngWriter};
use crate::request::{QrJob, QrRequest};
use crate::response::{image_response, QrResponse};

/// Validates requests and renders them as PNG QR codes.
///
/// A handler holds only immutable configuration and stateless collaborators,
/// so one instance can be shared across concurrent invocations.
///
/// # Example
///
/// ```
/// use qrgen_lib::{QrConfig, QrHandler};
///
/// let handler = QrHandler::new(QrConfig::default());
/// let response = handler.handle(Some(r#"{"url":"https%3A%2F%2Fexample.com%2F"}"#));
/// assert_eq!(response.status_code, 200);
/// ```
#[derive(Debug, Clone)]
pub struct QrHandler<E = QrMatrixEncoder, W = PngWriter> {
    config: QrConfig,
    encoder: E,
    writer: W,
}

impl QrHandler {
    /// Create a handler using the `qrcode` matrix encoder and PNG writer.
    pub fn new(config: QrConfig) -> Self {
        Self::with_collaborators(config, QrMatrixEncoder, PngWriter)
    }
}

impl<E: MatrixEncoder, W: ImageWriter> QrHandler<E, W> {
    /// Create a handler with custom encoding collaborators.
    pub fn with_collaborators(config: QrConfig, encoder: E, writer: W) -> Self {
        Self {
            config,
            encoder,
            writer,
        }
    }

    pub fn config(&self) -> &QrConfig {
        &self.config
    }

    /// Handle one raw request body.
    ///
    /// Never fails: every problem is converted into a JSON error response.
    pub fn handle(&self, body: Option<&str>) -> QrResponse {
        match self.try_handle(body) {
            Ok(png) => {
                info!(png_bytes = png.len(), "qr code generated");
                image_response(&png)
            }
            Err(err) => {
                if err.is_client_error() {
                    warn!(status = err.status().as_u16(), error = %err, "rejected qr request");
                } else {
                    error!(status = err.status().as_u16(), error = %err, "qr generation failed");
                }
                QrResponse::from_error(&err)
            }
        }
    }

    fn try_handle(&self, body: Option<&str>) -> Result<Vec<u8>> {
        let job = QrRequest::parse(body)?.resolve(&self.config)?;
        self.render(&job)
    }

    /// Encode a validated job as PNG bytes.
    pub fn render(&self, job: &QrJob) -> Result<Vec<u8>> {
        debug!(size = job.size, text_len = job.text.len(), "encoding qr matrix");
        let matrix = self.encoder.encode(&job.text, job.size, job.size)?;
        self.writer.write_png(&matrix)
    }
}

/// Handle one request body with the default encoder and writer.
///
/// Long-lived callers should keep a [`QrHandler`] instead.
pub fn handle(body: Option<&str>, config: &QrConfig) -> QrResponse {
    QrHandler::new(*config).handle(body)
}
