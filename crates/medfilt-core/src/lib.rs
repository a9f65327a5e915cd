//! medfilt-core - Basic image container for median filtering
//!
//! This crate provides the image data structure shared by the filter
//! implementations:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`PixelDepth`] - Bits per pixel
//! - [`PixelDiffResult`] - Result of comparing two images
//!
//! Filters in `medfilt-filter` only accept 8 bpp single-sample images, but the
//! container keeps the full set of depths so that callers get a typed error
//! instead of a silently misread buffer.

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth, PixelDiffResult};
