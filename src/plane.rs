//! Bit-plane transform and its inverse.
//!
//! Forward: the N pixels of a width x height grid are visited in column-major
//! order (x outer, y inner) and each pixel's 24-bit index is spread across 24
//! planes, plane `b` collecting bit `23 - b` of every index. The planes are
//! concatenated (plane 0 first) into a 24N-bit string, read as one
//! big-endian-significant integer, and serialized into exactly 3N bytes in
//! little-endian byte order.
//!
//! The column-major traversal is internal to the transform; callers always
//! see raster (row-major) pixel order. Encoder and decoder must agree on it.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::KisError;
use crate::pixel;

/// Pack a row-major RGB8 grid into the 3N-byte bit-plane payload.
///
/// `pixels` must hold at least `width * height * 3` bytes; the caller
/// validates dimensions and buffer length.
pub(crate) fn pack_planes(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let n = width * height;

    // Pixel indices in column-major traversal order.
    let mut indices = Vec::with_capacity(n);
    for x in 0..width {
        for y in 0..height {
            let off = (y * width + x) * 3;
            indices.push(pixel::index_from_rgb(
                pixels[off],
                pixels[off + 1],
                pixels[off + 2],
            ));
        }
    }

    // Bit p of the concatenated plane stream (p = 0 is the most significant
    // bit of the whole 24N-bit integer) lands at integer significance
    // s = 24N - 1 - p, i.e. payload byte s / 8, bit s % 8.
    let total_bits = n * 24;
    let mut out = vec![0u8; n * 3];
    for b in 0..24 {
        let sig = 23 - b;
        for (k, &index) in indices.iter().enumerate() {
            if (index >> sig) & 1 != 0 {
                let s = total_bits - 1 - (b * n + k);
                out[s / 8] |= 1 << (s % 8);
            }
        }
    }
    out
}

/// Unpack a 3N-byte payload back into a row-major RGB8 grid.
///
/// When `pre_reversed` is false (the normal case) the payload bytes are in
/// the little-endian order produced by [`pack_planes`] and are read back to
/// front; when true the bytes are already in plane-stream order and are read
/// as-is (used when an external tool has re-reversed the payload).
pub(crate) fn unpack_planes(
    payload: &[u8],
    width: usize,
    height: usize,
    pre_reversed: bool,
) -> Result<Vec<u8>, KisError> {
    if width == 0 || height == 0 {
        return Err(KisError::MalformedPayload(alloc::format!(
            "zero dimension: {width}x{height}"
        )));
    }
    let n = width * height;
    if payload.len() != n * 3 {
        return Err(KisError::MalformedPayload(alloc::format!(
            "payload is {} bytes, expected {} for {width}x{height}",
            payload.len(),
            n * 3
        )));
    }

    // Stream bit p lives in stream byte p / 8, MSB first within the byte.
    let stream_bit = |p: usize| -> u32 {
        let q = p / 8;
        let byte = if pre_reversed {
            payload[q]
        } else {
            payload[payload.len() - 1 - q]
        };
        u32::from((byte >> (7 - (p % 8))) & 1)
    };

    let mut out = vec![0u8; n * 3];
    for k in 0..n {
        // Plane b contributes bit 23 - b of pixel k's index.
        let mut index = 0u32;
        for b in 0..24 {
            index = (index << 1) | stream_bit(b * n + k);
        }

        // Transpose the column-major traversal position back to raster
        // order: k enumerated y fastest, so x = k / height, y = k % height.
        let x = k / height;
        let y = k % height;
        let off = (y * width + x) * 3;
        let [r, g, b] = pixel::rgb_from_index(index);
        out[off] = r;
        out[off + 1] = g;
        out[off + 2] = b;
    }
    Ok(out)
}
