//! Shared helpers for decoding handler responses in integration tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, ImageFormat};
use qrcode::{Color, EcLevel, QrCode};

use qrgen_lib::{QrResponse, QUIET_ZONE};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn png_bytes(response: &QrResponse) -> Vec<u8> {
    assert!(response.is_base64_encoded, "image bodies are base64");
    STANDARD
        .decode(&response.body)
        .expect("body is valid base64")
}

pub fn decode_image(response: &QrResponse) -> GrayImage {
    image::load_from_memory_with_format(&png_bytes(response), ImageFormat::Png)
        .expect("body is a PNG")
        .to_luma8()
}

/// Smallest edge, in pixels, handed to the decoder. Smaller images are
/// upscaled by an integer factor so one-pixel modules stay readable.
const MIN_DECODE_EDGE: u32 = 400;

/// Decode the single QR symbol in `image` with an independent reader.
pub fn decode_qr(image: &GrayImage) -> String {
    let (width, height) = image.dimensions();
    let factor = (MIN_DECODE_EDGE / width.min(height)).max(1);

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        (width * factor) as usize,
        (height * factor) as usize,
        |x, y| image.get_pixel(x as u32 / factor, y as u32 / factor).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR symbol");

    let (_, content) = grids[0].decode().expect("symbol decodes");
    content
}

/// Check the rendered geometry of `image` against a reference symbol.
///
/// Rebuilds the reference symbol for `expected`, locates it in the image from
/// the image dimensions, then checks every module center and the quiet zone
/// against the reference.
pub fn assert_encodes(image: &GrayImage, expected: &str) {
    let code = QrCode::with_error_correction_level(expected.as_bytes(), EcLevel::L)
        .expect("reference symbol encodes");
    let modules = code.width() as u32;
    let full = modules + 2 * QUIET_ZONE as u32;

    let (width, height) = image.dimensions();
    let scale = (width / full).min(height / full);
    assert!(scale >= 1, "image too small for the symbol");
    let left = (width - modules * scale) / 2;
    let top = (height - modules * scale) / 2;

    for y in 0..modules {
        for x in 0..modules {
            let px = left + x * scale + scale / 2;
            let py = top + y * scale + scale / 2;
            let dark = image.get_pixel(px, py).0[0] < 128;
            let expected_dark = code[(x as usize, y as usize)] == Color::Dark;
            assert_eq!(dark, expected_dark, "module ({x}, {y}) differs");
        }
    }

    let quiet = QUIET_ZONE as u32 * scale;
    for i in 0..quiet.min(left).min(top) {
        assert_eq!(image.get_pixel(i, i).0[0], 255, "quiet zone pixel ({i}, {i})");
    }
}
