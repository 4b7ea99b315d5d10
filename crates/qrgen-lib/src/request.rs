//! Request decoding and validation.
//!
//! Request bodies are untrusted, so fields are pulled out of a generic JSON
//! document one at a time rather than through a derived struct. This keeps
//! "field absent" and "field present with the wrong type" distinct, which the
//! validation order in [`QrRequest::resolve`] depends on.

use serde_json::{Map, Value};

use crate::config::QrConfig;
use crate::decode::decode_url;
use crate::error::{QrError, Result};

/// State of one optional field in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Not present, or explicitly `null`.
    #[default]
    Absent,
    /// Present with a usable value.
    Present(T),
    /// Present with the wrong JSON type.
    Invalid,
}

impl<T> Field<T> {
    fn from_json(value: Option<&Value>, extract: impl FnOnce(&Value) -> Option<T>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(value) => extract(value).map_or(Self::Invalid, Self::Present),
        }
    }
}

/// Fields extracted from a request body, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QrRequest {
    /// Percent-encoded URL to encode.
    pub url: Field<String>,
    /// Requested square size in pixels.
    pub size: Field<i64>,
}

/// A validated request, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrJob {
    /// Decoded URL text.
    pub text: String,
    /// Square size in pixels, within [`QrConfig::SIZE_RANGE`].
    pub size: u32,
}

impl QrRequest {
    /// Parse a raw request body.
    ///
    /// An absent or empty body is [`QrError::MissingBody`]; text that is not
    /// JSON is [`QrError::InvalidBody`]. A valid document that is not an
    /// object simply has no fields.
    pub fn parse(body: Option<&str>) -> Result<Self> {
        let body = match body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(QrError::MissingBody),
        };

        let document: Value = serde_json::from_str(body).map_err(|_| QrError::InvalidBody)?;
        Ok(document
            .as_object()
            .map(Self::from_object)
            .unwrap_or_default())
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            url: Field::from_json(object.get("url"), |v| v.as_str().map(str::to_string)),
            size: Field::from_json(object.get("size"), json_integer),
        }
    }

    /// Apply defaults and validate, in order: size type, size bounds, url.
    ///
    /// Size problems always win over url problems.
    pub fn resolve(self, config: &QrConfig) -> Result<QrJob> {
        let size = match self.size {
            Field::Absent => config.default_size,
            Field::Present(size) => size,
            Field::Invalid => return Err(QrError::InvalidSizeType),
        };

        if !QrConfig::SIZE_RANGE.contains(&size) {
            return Err(QrError::SizeOutOfRange { size });
        }

        let url = match self.url {
            Field::Present(url) => url,
            Field::Absent => return Err(QrError::MissingUrl),
            Field::Invalid => return Err(QrError::InvalidUrlType),
        };

        let size = u32::try_from(size).map_err(|_| QrError::SizeOutOfRange { size })?;

        Ok(QrJob {
            text: decode_url(&url),
            size,
        })
    }
}

/// Read a JSON integer, saturating values beyond `i64`.
///
/// serde_json stores integers above `u64::MAX` or below `i64::MIN` as `f64`,
/// so a whole float whose magnitude exceeds `i64` saturates too. Saturated
/// values are far outside the accepted range, so they fail the bounds check
/// instead of the type check.
fn json_integer(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }

    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() >= i64::MAX as f64)
        .map(|f| if f.is_sign_negative() { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> QrRequest {
        QrRequest::parse(Some(body)).expect("body parses")
    }

    #[test]
    fn parses_url_and_size() {
        let request = parse(r#"{"url":"https%3A%2F%2Fexample.com%2F","size":300}"#);
        assert_eq!(
            request.url,
            Field::Present("https%3A%2F%2Fexample.com%2F".to_string())
        );
        assert_eq!(request.size, Field::Present(300));
    }

    #[test]
    fn missing_and_empty_body() {
        assert_eq!(QrRequest::parse(None), Err(QrError::MissingBody));
        assert_eq!(QrRequest::parse(Some("")), Err(QrError::MissingBody));
    }

    #[test]
    fn malformed_json_is_invalid_body() {
        assert_eq!(
            QrRequest::parse(Some(r#"{"url": "#)),
            Err(QrError::InvalidBody)
        );
        assert_eq!(QrRequest::parse(Some("url=x")), Err(QrError::InvalidBody));
    }

    #[test]
    fn null_fields_are_absent() {
        let request = parse(r#"{"url":null,"size":null}"#);
        assert_eq!(request.url, Field::Absent);
        assert_eq!(request.size, Field::Absent);
    }

    #[test]
    fn non_object_documents_have_no_fields() {
        assert_eq!(parse("[1,2,3]"), QrRequest::default());
        assert_eq!(parse(r#""https://example.com""#), QrRequest::default());
        assert_eq!(parse("42"), QrRequest::default());
    }

    #[test]
    fn wrong_types_are_invalid() {
        let request = parse(r#"{"url":42,"size":"300"}"#);
        assert_eq!(request.url, Field::Invalid);
        assert_eq!(request.size, Field::Invalid);

        assert_eq!(parse(r#"{"size":300.5}"#).size, Field::Invalid);
        assert_eq!(parse(r#"{"size":true}"#).size, Field::Invalid);
    }

    #[test]
    fn huge_sizes_saturate() {
        let request = parse(r#"{"size":18446744073709551615}"#);
        assert_eq!(request.size, Field::Present(i64::MAX));

        let request = parse(r#"{"size":100000000000000000000000}"#);
        assert_eq!(request.size, Field::Present(i64::MAX));

        let request = parse(r#"{"size":-9223372036854775809}"#);
        assert_eq!(request.size, Field::Present(i64::MIN));

        let request = parse(r#"{"size":-100000000000000000000000}"#);
        assert_eq!(request.size, Field::Present(i64::MIN));
    }

    #[test]
    fn huge_sizes_fail_the_bounds_check() {
        let config = QrConfig::default();
        for size in [
            "18446744073709551615",
            "100000000000000000000000",
            "-9223372036854775809",
        ] {
            let body = format!(r#"{{"url":"x","size":{size}}}"#);
            let err = parse(&body).resolve(&config).unwrap_err();
            assert!(
                matches!(err, QrError::SizeOutOfRange { .. }),
                "size {size} gave {err:?}"
            );
        }
    }

    #[test]
    fn absent_size_uses_config_default() {
        let job = parse(r#"{"url":"x"}"#)
            .resolve(&QrConfig::default())
            .unwrap();
        assert_eq!(job.size, 200);

        let job = parse(r#"{"url":"x"}"#)
            .resolve(&QrConfig::with_default_size(640))
            .unwrap();
        assert_eq!(job.size, 640);
    }

    #[test]
    fn request_size_overrides_config_default() {
        let job = parse(r#"{"url":"x","size":75}"#)
            .resolve(&QrConfig::with_default_size(640))
            .unwrap();
        assert_eq!(job.size, 75);
    }

    #[test]
    fn size_bounds_are_checked_before_url() {
        let err = parse(r#"{"size":10}"#)
            .resolve(&QrConfig::default())
            .unwrap_err();
        assert_eq!(err, QrError::SizeOutOfRange { size: 10 });

        let err = parse(r#"{"size":"big"}"#)
            .resolve(&QrConfig::default())
            .unwrap_err();
        assert_eq!(err, QrError::InvalidSizeType);
    }

    #[test]
    fn out_of_range_default_is_rejected_per_request() {
        let err = parse(r#"{"url":"x"}"#)
            .resolve(&QrConfig::with_default_size(5))
            .unwrap_err();
        assert_eq!(err, QrError::SizeOutOfRange { size: 5 });
    }

    #[test]
    fn url_errors() {
        let config = QrConfig::default();
        assert_eq!(
            parse(r#"{"size":100}"#).resolve(&config),
            Err(QrError::MissingUrl)
        );
        assert_eq!(
            parse(r#"{"url":["a"]}"#).resolve(&config),
            Err(QrError::InvalidUrlType)
        );
    }

    #[test]
    fn url_is_percent_decoded() {
        let job = parse(r#"{"url":"https%3A%2F%2Fexample.com%2F%3Fq%3Da+b"}"#)
            .resolve(&QrConfig::default())
            .unwrap();
        assert_eq!(job.text, "https://example.com/?q=a b");
    }

    #[test]
    fn bounds_are_inclusive() {
        let config = QrConfig::default();
        assert!(parse(r#"{"url":"x","size":50}"#).resolve(&config).is_ok());
        assert!(parse(r#"{"url":"x","size":1000}"#).resolve(&config).is_ok());
        assert!(parse(r#"{"url":"x","size":49}"#).resolve(&config).is_err());
        assert!(parse(r#"{"url":"x","size":1001}"#).resolve(&config).is_err());
    }
}
