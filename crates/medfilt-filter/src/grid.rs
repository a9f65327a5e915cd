//! Unpacked sample buffer used by the filter scans
//!
//! The filters walk windows sample by sample, so the border-extended image is
//! unpacked once from 32-bit words into a plain row-major byte buffer.

use crate::extend::extend_by_replication;
use crate::{FilterError, FilterResult};
use medfilt_core::{Pix, PixelDepth};

/// Validate that the input image is 8 bpp with one sample per pixel.
pub(crate) fn check_8bpp_gray(pix: &Pix) -> FilterResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8-bpp grayscale",
            actual: pix.depth().bits(),
        });
    }
    if pix.spp() != 1 {
        return Err(FilterError::UnsupportedSpp {
            expected: 1,
            actual: pix.spp(),
        });
    }
    Ok(())
}

/// Row-major 8-bit samples.
#[derive(Debug, Clone)]
pub(crate) struct GrayGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayGrid {
    /// Unpack an 8 bpp image.
    pub(crate) fn from_pix(pix: &Pix) -> FilterResult<Self> {
        check_8bpp_gray(pix)?;
        Ok(Self {
            width: pix.width() as usize,
            height: pix.height() as usize,
            data: pix.to_gray_bytes()?,
        })
    }

    /// Border-extend `pix` by `radius` on every side and unpack the result.
    pub(crate) fn padded(pix: &Pix, radius: u32) -> FilterResult<Self> {
        check_8bpp_gray(pix)?;
        Self::from_pix(&extend_by_replication(pix, radius, radius)?)
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Samples of row `y`.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}
