//! Payload size reconciliation.
//!
//! A container's header dimensions are trusted, but the payload length is
//! not authoritative once a BMP-wrapped file has been edited by an external
//! raster tool. When the stripped payload does not measure exactly
//! `3 * width * height` bytes, decoding never proceeds silently: the caller
//! either gets a [`KisError::PayloadSizeMismatch`] or has explicitly opted
//! in to the deterministic pad/truncate policy.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::KisError;

/// What to do when the payload length does not match the header dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeRecovery {
    /// Fail with [`KisError::PayloadSizeMismatch`]. The default.
    #[default]
    Reject,
    /// Zero-pad a short payload at the end, or truncate a long one at the
    /// end, to exactly the expected size.
    PadOrTruncate,
}

/// Reconcile `payload` against the expected byte count.
///
/// Returns the payload unchanged (borrowed) when the length already matches;
/// otherwise applies `policy`. Padding and truncation both operate on the
/// end of the payload only.
pub fn reconcile(
    payload: &[u8],
    expected: usize,
    policy: SizeRecovery,
) -> Result<Cow<'_, [u8]>, KisError> {
    let actual = payload.len();
    if actual == expected {
        return Ok(Cow::Borrowed(payload));
    }
    match policy {
        SizeRecovery::Reject => Err(KisError::PayloadSizeMismatch { expected, actual }),
        SizeRecovery::PadOrTruncate => {
            if actual < expected {
                let mut padded = Vec::with_capacity(expected);
                padded.extend_from_slice(payload);
                padded.resize(expected, 0);
                Ok(Cow::Owned(padded))
            } else {
                Ok(Cow::Borrowed(&payload[..expected]))
            }
        }
    }
}
