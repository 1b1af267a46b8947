//! Plain 24-bit BMP encoder for the pixel-grid collaborator.

use alloc::vec::Vec;

use crate::error::KisError;

pub(crate) fn encode_bmp(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, KisError> {
    if width == 0 || height == 0 {
        return Err(KisError::InvalidHeader(alloc::format!(
            "zero dimension: {width}x{height}"
        )));
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

    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or(KisError::DimensionsTooLarge { width, height })?;
    let pixel_data_size = row_stride
        .checked_mul(h)
        .ok_or(KisError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(54)
        .ok_or(KisError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);
    write_header(&mut out, file_size, pixel_data_size, width, height);

    let pad_bytes = row_stride - w * 3;
    for row in (0..h).rev() {
        let row_start = row * w * 3;
        for px in pixels[row_start..row_start + w * 3].chunks_exact(3) {
            out.push(px[2]);
            out.push(px[1]);
            out.push(px[0]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, file_size: usize, pixel_data_size: usize, width: u32, height: u32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&54u32.to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bpp
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
