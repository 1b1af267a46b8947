//! Direct-color BMP decoder for the pixel-grid collaborator.

use alloc::vec::Vec;

use super::PixelGrid;
use crate::error::KisError;
use crate::limits::Limits;

const FILE_HEADER_LEN: usize = 14;

fn u16_le(data: &[u8], off: usize) -> Result<u16, KisError> {
    let bytes = data
        .get(off..off + 2)
        .ok_or(KisError::UnexpectedEof)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn u32_le(data: &[u8], off: usize) -> Result<u32, KisError> {
    let bytes = data
        .get(off..off + 4)
        .ok_or(KisError::UnexpectedEof)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

struct BmpHeader {
    width: u32,
    height: u32,
    top_down: bool,
    bytes_per_pixel: usize,
    data_offset: usize,
}

fn parse_header(data: &[u8]) -> Result<BmpHeader, KisError> {
    if data.len() < 2 || &data[0..2] != b"BM" {
        return Err(KisError::InvalidHeader("missing BM magic".into()));
    }
    let data_offset = u32_le(data, 10)? as usize;
    let ihsize = u32_le(data, 14)?;

    let (width, height, top_down, bpp, compression, colors_used);
    match ihsize {
        12 => {
            // OS/2 BITMAPCOREHEADER: u16 dimensions, never compressed
            width = u32::from(u16_le(data, 18)?);
            height = u32::from(u16_le(data, 20)?);
            top_down = false;
            bpp = u16_le(data, 24)?;
            compression = 0;
            colors_used = 0;
        }
        40 | 52 | 56 | 64 | 108 | 124 => {
            let w = u32_le(data, 18)? as i32;
            let h = u32_le(data, 22)? as i32;
            if w < 0 {
                return Err(KisError::InvalidHeader("BMP width is negative".into()));
            }
            width = w as u32;
            top_down = h < 0;
            height = h.unsigned_abs();
            bpp = u16_le(data, 28)?;
            compression = u32_le(data, 30)?;
            colors_used = u32_le(data, 46)?;
        }
        _ => {
            return Err(KisError::InvalidHeader(alloc::format!(
                "unknown BMP info header size: {ihsize}"
            )));
        }
    }

    if width == 0 {
        return Err(KisError::InvalidHeader("BMP width is zero".into()));
    }
    if height == 0 {
        return Err(KisError::InvalidHeader("BMP height is zero".into()));
    }
    if compression != 0 {
        return Err(KisError::UnsupportedVariant(alloc::format!(
            "compressed BMP (method {compression}) is not supported as a pixel source"
        )));
    }

    // A color table between the headers and the pixel data marks an
    // indexed-color file, which the collaborator contract rejects outright.
    let headers_end = FILE_HEADER_LEN + ihsize as usize;
    if bpp <= 8 && (colors_used > 0 || data_offset > headers_end) {
        return Err(KisError::UnsupportedPixelFormat(alloc::format!(
            "indexed-colour ({bpp}-bit palette) BMP; convert to 24-bit RGB and retry"
        )));
    }

    let bytes_per_pixel = match bpp {
        24 => 3,
        32 => 4,
        _ => {
            return Err(KisError::UnsupportedVariant(alloc::format!(
                "{bpp}-bit BMP is not supported as a pixel source (need 24 or 32)"
            )));
        }
    };

    Ok(BmpHeader {
        width,
        height,
        top_down,
        bytes_per_pixel,
        data_offset,
    })
}

pub(crate) fn decode_bmp(data: &[u8], limits: Option<&Limits>) -> Result<PixelGrid, KisError> {
    let header = parse_header(data)?;
    let width = header.width;
    let height = header.height;

    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let w = width as usize;
    let h = height as usize;
    let out_bytes = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(KisError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }

    // Rows are padded to 4-byte boundaries in the file.
    let row_bytes = w
        .checked_mul(header.bytes_per_pixel)
        .ok_or(KisError::DimensionsTooLarge { width, height })?;
    let row_stride = row_bytes
        .checked_add(3)
        .map(|r| r & !3)
        .ok_or(KisError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(out_bytes);
    for y in 0..h {
        let src_row = if header.top_down { y } else { h - 1 - y };
        let row_start = header
            .data_offset
            .checked_add(src_row.checked_mul(row_stride).ok_or(KisError::UnexpectedEof)?)
            .ok_or(KisError::UnexpectedEof)?;
        let row_end = row_start
            .checked_add(row_bytes)
            .ok_or(KisError::UnexpectedEof)?;
        let row = data.get(row_start..row_end).ok_or(KisError::UnexpectedEof)?;
        for px in row.chunks_exact(header.bytes_per_pixel) {
            // BGR(A) in the file; alpha (if any) is dropped
            out.push(px[2]);
            out.push(px[1]);
            out.push(px[0]);
        }
    }

    Ok(PixelGrid::new(out, width, height))
}
