//! Container framings around the packed bit-plane payload.
//!
//! Two framings are supported: the minimal `CKT` header, and a BMP-wrapped
//! framing whose fixed header template lets ordinary raster tools open the
//! encoded payload as a 24-bit bitmap before it is decoded back.

use alloc::vec::Vec;

use crate::error::KisError;

/// Which container framing wraps the payload.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Framing {
    /// Minimal 7-byte `CKT` header: magic, width u16 LE, height u16 LE.
    Kis,
    /// Fixed 122-byte BMP header (file header + BITMAPV4HEADER) with
    /// width/height/size patched in, plus a zero trailer of `height` bytes.
    Bitmap,
}

pub(crate) const KIS_MAGIC: &[u8; 3] = b"CKT";
pub(crate) const KIS_HEADER_LEN: usize = 7;
pub(crate) const BMP_HEADER_LEN: usize = 122;

const BMP_WIDTH_OFFSET: usize = 18;
const BMP_HEIGHT_OFFSET: usize = 22;
const BMP_SIZE_OFFSET: usize = 34;

/// BMP header template for the wrapped framing, preserved bit-for-bit from
/// the reference encoding for payload compatibility. 14-byte file header
/// followed by a 108-byte BITMAPV4HEADER: 24 bpp, no compression, BGRs
/// colorspace. The 0xff placeholder fields (width, height, image size) are
/// patched per call; the file-size field at offset 2 is left as the
/// reference encoder wrote it.
const BMP_TEMPLATE: [u8; BMP_HEADER_LEN] = [
    0x42, 0x4d, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7a, 0x00, //
    0x00, 0x00, 0x6c, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0xff, 0xff, //
    0x00, 0x00, 0x01, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, //
    0xff, 0xff, 0xc3, 0x0e, 0x00, 0x00, 0xc3, 0x0e, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x42, 0x47, 0x52, 0x73, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00,
];

/// A parsed container: framing kind, header dimensions, and the payload
/// slice with header (and any trailer) stripped.
pub(crate) struct Unframed<'a> {
    pub framing: Framing,
    pub width: u16,
    pub height: u16,
    pub payload: &'a [u8],
}

/// Wrap a packed payload in the requested framing.
pub(crate) fn frame(payload: &[u8], width: u16, height: u16, framing: Framing) -> Vec<u8> {
    match framing {
        Framing::Kis => {
            let mut out = Vec::with_capacity(KIS_HEADER_LEN + payload.len());
            out.extend_from_slice(KIS_MAGIC);
            out.extend_from_slice(&width.to_le_bytes());
            out.extend_from_slice(&height.to_le_bytes());
            out.extend_from_slice(payload);
            out
        }
        Framing::Bitmap => {
            let mut header = BMP_TEMPLATE;
            header[BMP_WIDTH_OFFSET..BMP_WIDTH_OFFSET + 2].copy_from_slice(&width.to_le_bytes());
            header[BMP_HEIGHT_OFFSET..BMP_HEIGHT_OFFSET + 2].copy_from_slice(&height.to_le_bytes());
            // Image-size field counts header + payload; the trailer is not
            // part of the image per the header's own accounting.
            let total = (BMP_HEADER_LEN + payload.len()) as u32;
            header[BMP_SIZE_OFFSET..BMP_SIZE_OFFSET + 4].copy_from_slice(&total.to_le_bytes());

            let trailer = height as usize;
            let mut out = Vec::with_capacity(BMP_HEADER_LEN + payload.len() + trailer);
            out.extend_from_slice(&header);
            out.extend_from_slice(payload);
            // Zero trailer so raster tools don't reject the file as
            // truncated. Carries no pixel data; discarded on parse.
            out.extend(core::iter::repeat_n(0u8, trailer));
            out
        }
    }
}

/// Sniff the framing from the leading bytes and strip header and trailer.
///
/// Header dimensions are trusted; the payload length is not (the file may
/// have passed through an external raster tool) and is reconciled later by
/// the size-recovery step.
pub(crate) fn unframe(data: &[u8]) -> Result<Unframed<'_>, KisError> {
    if data.starts_with(b"BM") {
        if data.len() < BMP_HEADER_LEN {
            return Err(KisError::UnexpectedEof);
        }
        let width = u16::from_le_bytes([data[BMP_WIDTH_OFFSET], data[BMP_WIDTH_OFFSET + 1]]);
        let height = u16::from_le_bytes([data[BMP_HEIGHT_OFFSET], data[BMP_HEIGHT_OFFSET + 1]]);
        if width == 0 || height == 0 {
            return Err(KisError::MalformedPayload(alloc::format!(
                "zero dimension in BMP framing header: {width}x{height}"
            )));
        }
        let trailer = height as usize;
        if data.len() < BMP_HEADER_LEN + trailer {
            return Err(KisError::UnexpectedEof);
        }
        Ok(Unframed {
            framing: Framing::Bitmap,
            width,
            height,
            payload: &data[BMP_HEADER_LEN..data.len() - trailer],
        })
    } else if data.starts_with(KIS_MAGIC) {
        if data.len() < KIS_HEADER_LEN {
            return Err(KisError::UnexpectedEof);
        }
        let width = u16::from_le_bytes([data[3], data[4]]);
        let height = u16::from_le_bytes([data[5], data[6]]);
        if width == 0 || height == 0 {
            return Err(KisError::MalformedPayload(alloc::format!(
                "zero dimension in CKT header: {width}x{height}"
            )));
        }
        Ok(Unframed {
            framing: Framing::Kis,
            width,
            height,
            payload: &data[KIS_HEADER_LEN..],
        })
    } else {
        Err(KisError::UnknownContainer)
    }
}
