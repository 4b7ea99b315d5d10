use http::StatusCode;
use thiserror::Error;

/// Convenient result alias for the qrgen library.
pub type Result<T> = std::result::Result<T, QrError>;

/// Every way a single QR request can fail.
///
/// The `Display` output of each variant is the exact text placed in the
/// `error` field of the JSON response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// The request carried no body, or an empty one.
    #[error("missing body")]
    MissingBody,

    /// The body was not syntactically valid JSON.
    #[error("invalid body")]
    InvalidBody,

    /// `size` was present but was not an integer.
    #[error("size must be an integer")]
    InvalidSizeType,

    /// The resolved size falls outside the accepted range.
    #[error("size must be between 50 and 1000")]
    SizeOutOfRange { size: i64 },

    /// `url` was absent or `null`.
    #[error("missing url")]
    MissingUrl,

    /// `url` was present but was not a string.
    #[error("url must be a string")]
    InvalidUrlType,

    /// The matrix encoder could not represent the content at this size.
    #[error("cannot generate qr code - {0}")]
    Encode(String),

    /// Writing the bitmap as PNG failed.
    #[error("cannot generate qr code - {0}")]
    Image(String),
}

impl QrError {
    /// HTTP status code reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Encode(_) | Self::Image(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Whether the caller is responsible for this error.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl From<qrcode::types::QrError> for QrError {
    fn from(err: qrcode::types::QrError) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<image::ImageError> for QrError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}
