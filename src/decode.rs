use alloc::vec::Vec;

use crate::container::{self, Framing};
use crate::error::KisError;
use crate::limits::Limits;
use crate::plane;
use crate::recovery::{self, SizeRecovery};

/// Decoded image: row-major RGB8 pixels plus container metadata.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// The framing the container was wrapped in.
    pub framing: Framing,
}

impl DecodeOutput {
    /// Access the pixel data (row-major, 3 bytes per pixel).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// View the pixel data as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }
}

/// Builder for decoding a KIS container back into a pixel grid.
///
/// ```
/// use kisimg::{DecodeRequest, EncodeRequest};
///
/// let encoded = EncodeRequest::bitmap().encode(&[0u8; 3], 1, 1)?;
/// let decoded = DecodeRequest::new(&encoded).decode()?;
/// assert_eq!(decoded.pixels(), &[0, 0, 0]);
/// # Ok::<(), kisimg::KisError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    recovery: SizeRecovery,
    pre_reversed: bool,
}

impl<'a> DecodeRequest<'a> {
    /// Decode from a complete container (framing auto-detected).
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            recovery: SizeRecovery::default(),
            pre_reversed: false,
        }
    }

    /// Apply resource limits during decoding.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Set the policy for payload lengths that contradict the header
    /// dimensions. Defaults to [`SizeRecovery::Reject`].
    pub fn with_recovery(mut self, recovery: SizeRecovery) -> Self {
        self.recovery = recovery;
        self
    }

    /// Treat the payload bytes as already being in plane-stream order,
    /// skipping the little-endian byte-order reversal. Used when the file
    /// has passed through a tool that re-reversed the payload.
    pub fn payload_reversed(mut self, pre_reversed: bool) -> Self {
        self.pre_reversed = pre_reversed;
        self
    }

    /// Run the decode.
    pub fn decode(self) -> Result<DecodeOutput, KisError> {
        let unframed = container::unframe(self.data)?;
        let width = u32::from(unframed.width);
        let height = u32::from(unframed.height);

        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }
        let expected = (unframed.width as usize)
            .checked_mul(unframed.height as usize)
            .and_then(|wh| wh.checked_mul(3))
            .ok_or(KisError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = self.limits {
            limits.check_memory(expected)?;
        }

        let payload = recovery::reconcile(unframed.payload, expected, self.recovery)?;
        let pixels = plane::unpack_planes(
            payload.as_ref(),
            unframed.width as usize,
            unframed.height as usize,
            self.pre_reversed,
        )?;

        Ok(DecodeOutput {
            pixels,
            width,
            height,
            framing: unframed.framing,
        })
    }
}
