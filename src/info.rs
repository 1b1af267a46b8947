use crate::container::{self, Framing};
use crate::error::KisError;

/// Container information probed from the header without decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerInfo {
    pub width: u32,
    pub height: u32,
    /// Which framing wraps the payload.
    pub framing: Framing,
    /// Byte length of the stripped payload as found in the file. May differ
    /// from `3 * width * height` if the file has been edited externally.
    pub payload_len: usize,
}

impl ContainerInfo {
    /// Probe a container's framing and dimensions from its leading bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, KisError> {
        let unframed = container::unframe(data)?;
        Ok(ContainerInfo {
            width: u32::from(unframed.width),
            height: u32::from(unframed.height),
            framing: unframed.framing,
            payload_len: unframed.payload.len(),
        })
    }
}
