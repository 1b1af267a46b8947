use alloc::vec::Vec;

use crate::container::{self, Framing};
use crate::error::KisError;
use crate::plane;

/// Builder for encoding a pixel grid into a KIS container.
///
/// ```
/// use kisimg::EncodeRequest;
///
/// let pixels = [0u8; 12]; // 2x2 all-black, row-major RGB
/// let encoded = EncodeRequest::kis().encode(&pixels, 2, 2)?;
/// assert_eq!(&encoded[..3], b"CKT");
/// # Ok::<(), kisimg::KisError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    framing: Framing,
}

impl EncodeRequest {
    /// Encode with the minimal `CKT` framing.
    pub fn kis() -> Self {
        Self {
            framing: Framing::Kis,
        }
    }

    /// Encode with the BMP-wrapped framing, inspectable by raster tools.
    pub fn bitmap() -> Self {
        Self {
            framing: Framing::Bitmap,
        }
    }

    /// Encode with an explicit framing.
    pub fn with_framing(framing: Framing) -> Self {
        Self { framing }
    }

    /// Encode a row-major RGB8 pixel grid into a framed container.
    ///
    /// `pixels` must hold at least `width * height * 3` bytes. Dimensions
    /// are limited to 65535 on each axis (the container stores u16).
    pub fn encode(&self, pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, KisError> {
        if width == 0 || height == 0 {
            return Err(KisError::InvalidHeader(alloc::format!(
                "zero dimension: {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(KisError::DimensionsTooLarge { width, height });
        }
        let w = width as usize;
        let h = height as usize;
        let needed = w
            .checked_mul(h)
            .and_then(|wh| wh.checked_mul(3))
            .ok_or(KisError::DimensionsTooLarge { width, height })?;
        if pixels.len() < needed {
            return Err(KisError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }

        let payload = plane::pack_planes(&pixels[..needed], w, h);
        debug_assert_eq!(payload.len(), needed);
        Ok(container::frame(
            &payload,
            width as u16,
            height as u16,
            self.framing,
        ))
    }

    /// Encode a row-major grid of typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn encode_rgb(
        &self,
        pixels: &[rgb::RGB8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, KisError> {
        use rgb::ComponentBytes as _;
        self.encode(pixels.as_bytes(), width, height)
    }
}
