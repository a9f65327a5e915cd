//! Image comparison operations
//!
//! This module provides functions for comparing images:
//!
//! - Pixel equality checks
//! - Pixel difference counting

use super::Pix;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDiffResult {
    /// Number of pixels that differ
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Maximum absolute pixel difference value
    pub max_diff: u32,
    /// First differing pixel in raster order, if any
    pub first_diff: Option<(u32, u32)>,
}

impl Pix {
    /// Count the number of pixels that differ between two images.
    ///
    /// # Arguments
    ///
    /// * `other` - Image to compare with
    ///
    /// # Returns
    ///
    /// A [`PixelDiffResult`] with difference statistics.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or depths.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<PixelDiffResult> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        if self.depth() != other.depth() {
            return Err(Error::IncompatibleDepths(
                self.depth().bits(),
                other.depth().bits(),
            ));
        }

        let mut n_diff = 0u64;
        let mut max_diff = 0u32;
        let mut first_diff = None;
        for y in 0..self.height() {
            for x in 0..self.width() {
                let d = self
                    .get_pixel_unchecked(x, y)
                    .abs_diff(other.get_pixel_unchecked(x, y));
                if d != 0 {
                    n_diff += 1;
                    max_diff = max_diff.max(d);
                    first_diff.get_or_insert((x, y));
                }
            }
        }

        let total = u64::from(self.width()) * u64::from(self.height());
        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / total as f64,
            max_diff,
            first_diff,
        })
    }

    /// Check if two images are exactly equal.
    ///
    /// Images of different size or depth are never equal.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other)
            && self.spp() == other.spp()
            && (0..self.height()).all(|y| {
                (0..self.width())
                    .all(|x| self.get_pixel_unchecked(x, y) == other.get_pixel_unchecked(x, y))
            })
    }
}
