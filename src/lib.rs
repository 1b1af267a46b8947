//! # kisimg
//!
//! Lossless bit-plane image container codec for the KIS format.
//!
//! Instead of storing interleaved RGB triples, KIS re-encodes an image as 24
//! separate single-bit planes: plane `b` holds bit `23 - b` of every pixel's
//! combined 24-bit color index, collected across the whole image. The planes
//! are concatenated into one bitstream, packed into bytes, and wrapped in one
//! of two container framings:
//!
//! - **Minimal** (`.kis`): a 7-byte `CKT` header carrying the dimensions.
//! - **BMP-wrapped**: a fixed BMP header so the encoded payload can be opened
//!   and manipulated by ordinary raster tools before being decoded back.
//!
//! The payload is always exactly `3 * width * height` bytes — this is a
//! reorganization of the pixel data, not a compression.
//!
//! ## Usage
//!
//! ```
//! use kisimg::{DecodeRequest, EncodeRequest};
//!
//! // 2x1 image: one white pixel, one black pixel (row-major RGB)
//! let pixels = [255u8, 255, 255, 0, 0, 0];
//!
//! let encoded = EncodeRequest::kis().encode(&pixels, 2, 1)?;
//!
//! let decoded = DecodeRequest::new(&encoded).decode()?;
//! assert_eq!(decoded.width, 2);
//! assert_eq!(decoded.height, 1);
//! assert_eq!(decoded.pixels(), &pixels[..]);
//! # Ok::<(), kisimg::KisError>(())
//! ```
//!
//! ## Size-mismatch recovery
//!
//! A BMP-wrapped payload that has been edited by an external raster tool may
//! no longer match the byte count implied by its header dimensions. Decoding
//! rejects the mismatch by default; callers can opt in to a deterministic
//! zero-pad/truncate recovery via [`DecodeRequest::with_recovery`] and
//! [`SizeRecovery::PadOrTruncate`].
//!
//! ## Non-Goals
//!
//! - Compression of any kind (the output is never smaller than raw RGB)
//! - Lossy modes, color spaces beyond 8-bit RGB, palette/indexed images

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod container;
mod error;
mod info;
mod limits;
mod pixel;
mod plane;
pub mod recovery;

#[cfg(feature = "bmp")]
pub mod bmp;

mod decode;
mod encode;

// Re-exports
pub use container::Framing;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use error::KisError;
pub use info::ContainerInfo;
pub use limits::Limits;
pub use recovery::SizeRecovery;
