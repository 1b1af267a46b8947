//! Pixel index mapping: (r, g, b) <-> 24-bit combined color value.
//!
//! The index is `r * 2^16 + g * 2^8 + b`, a bijection on [0, 2^24). The
//! bit-plane transform operates on these indices rather than on separate
//! channel samples.

/// Combine an RGB triple into its 24-bit pixel index.
#[inline]
pub(crate) fn index_from_rgb(r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([0, r, g, b])
}

/// Split a 24-bit pixel index back into its RGB triple (big-endian split).
///
/// Bits above 23 are ignored.
#[inline]
pub(crate) fn rgb_from_index(index: u32) -> [u8; 3] {
    let [_, r, g, b] = index.to_be_bytes();
    [r, g, b]
}
