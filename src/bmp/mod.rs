//! BMP pixel-grid loader and saver.
//!
//! This is the raster-image collaborator of the codec: encoding reads its
//! source grid from a BMP file, decoding writes its output grid as one. It
//! deliberately covers only direct-color BMPs — uncompressed 24-bit BGR and
//! 32-bit BGRA (alpha dropped). Palette/indexed files are rejected with
//! [`KisError::UnsupportedPixelFormat`]; other raster formats should be
//! converted to BMP first.

mod decode;
mod encode;

use alloc::vec::Vec;

use crate::error::KisError;
use crate::limits::Limits;

/// A decoded pixel grid: row-major RGB8 samples.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl PixelGrid {
    /// Access the pixel data (row-major, 3 bytes per pixel).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }
}

/// Decode a BMP file into a row-major RGB8 pixel grid.
pub fn decode(data: &[u8], limits: Option<&Limits>) -> Result<PixelGrid, KisError> {
    decode::decode_bmp(data, limits)
}

/// Encode a row-major RGB8 pixel grid as an uncompressed 24-bit BMP.
pub fn encode(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, KisError> {
    encode::encode_bmp(pixels, width, height)
}
