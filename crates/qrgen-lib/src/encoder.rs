//! QR matrix encoding.
//!
//! The QR symbol itself comes from the `qrcode` crate. This module scales
//! that symbol into a pixel [`BitMatrix`] of the requested dimensions:
//!
//! - error correction is fixed at level L
//! - a quiet zone of [`QUIET_ZONE`] modules surrounds the symbol
//! - each module becomes an integer-sized square, and the symbol is centered
//! - when the symbol plus quiet zone needs more pixels than requested, the
//!   matrix grows to that natural size instead of clipping

use qrcode::{Color, EcLevel, QrCode};

use crate::error::Result;

/// Width of the light border around the symbol, in modules.
pub const QUIET_ZONE: usize = 4;

/// A rectangular grid of pixels, `true` meaning dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BitMatrix {
    /// Create an all-light matrix.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is dark. Out-of-bounds pixels are light.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[self.index(x, y)]
    }

    /// Mark a rectangle dark, clipped to the matrix bounds.
    pub fn set_region(&mut self, left: u32, top: u32, width: u32, height: u32) {
        let right = left.saturating_add(width).min(self.width);
        let bottom = top.saturating_add(height).min(self.height);
        for y in top..bottom {
            for x in left..right {
                let index = self.index(x, y);
                self.bits[index] = true;
            }
        }
    }

    /// Number of dark pixels.
    pub fn dark_count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Turns text into a pixel matrix of (at least) the requested dimensions.
///
/// Implementations must be stateless so a single instance can serve
/// concurrent invocations.
pub trait MatrixEncoder: Send + Sync {
    fn encode(&self, text: &str, width: u32, height: u32) -> Result<BitMatrix>;
}

/// [`MatrixEncoder`] backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrMatrixEncoder;

impl MatrixEncoder for QrMatrixEncoder {
    fn encode(&self, text: &str, width: u32, height: u32) -> Result<BitMatrix> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)?;
        Ok(render(&code, width, height))
    }
}

fn render(code: &QrCode, width: u32, height: u32) -> BitMatrix {
    let modules = code.width() as u32;
    let quiet = QUIET_ZONE as u32;
    let full = modules + quiet * 2;

    let output_width = width.max(full);
    let output_height = height.max(full);
    let scale = (output_width / full).min(output_height / full);

    // Padding is measured from the symbol edge, so it already contains the
    // quiet zone (plus any leftover pixels).
    let left = (output_width - modules * scale) / 2;
    let top = (output_height - modules * scale) / 2;

    let mut matrix = BitMatrix::new(output_width, output_height);
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == Color::Dark {
                matrix.set_region(left + x * scale, top + y * scale, scale, scale);
            }
        }
    }
    matrix
}
