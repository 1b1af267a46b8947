use alloc::string::String;

/// Errors from KIS encoding and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum KisError {
    #[error("leading bytes match neither the CKT nor the BMP framing")]
    UnknownContainer,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("payload size mismatch: expected {expected} bytes, got {actual}")]
    PayloadSizeMismatch { expected: usize, actual: usize },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,
}
