//! Percent-decoding of the `url` request field.

use percent_encoding::percent_decode_str;

/// Decode a form-style percent-encoded string.
///
/// `%XX` escapes become bytes and `+` becomes a space, the same rules HTML
/// form encoding uses. The decoded bytes are read as UTF-8.
///
/// Decoding never fails: a `%` that is not followed by two hex digits is kept
/// literally, and invalid UTF-8 sequences are replaced with U+FFFD.
pub fn decode_url(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
