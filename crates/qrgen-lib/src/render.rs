//! PNG output for pixel matrices.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};

use crate::encoder::BitMatrix;
use crate::error::Result;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Serializes a [`BitMatrix`] into image bytes.
pub trait ImageWriter: Send + Sync {
    fn write_png(&self, matrix: &BitMatrix) -> Result<Vec<u8>>;
}

/// [`ImageWriter`] producing 8-bit grayscale PNGs, dark pixels black.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngWriter;

impl PngWriter {
    /// Convert a matrix into a grayscale image buffer.
    pub fn to_image(matrix: &BitMatrix) -> GrayImage {
        GrayImage::from_fn(matrix.width(), matrix.height(), |x, y| {
            if matrix.get(x, y) {
                DARK
            } else {
                LIGHT
            }
        })
    }
}

impl ImageWriter for PngWriter {
    fn write_png(&self, matrix: &BitMatrix) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(Self::to_image(matrix))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
