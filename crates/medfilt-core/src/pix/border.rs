//! Border operations for images
//!
//! This module provides functions for adding and removing constant-valued
//! borders (padding) around images:
//!
//! - Uniform borders (same size on all sides)
//! - General borders (different size per side)
//!
//! Edge-replicating borders, which the median filters use, live in
//! `medfilt-filter` (`extend_by_replication`).

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Add a uniform border around the image.
    ///
    /// Creates a new image with `npix` pixels of border on all sides,
    /// filled with the specified value.
    ///
    /// # Arguments
    ///
    /// * `npix` - Border width in pixels
    /// * `val` - Border pixel value
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + 2*npix, height + 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions would overflow.
    pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Add a general border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width
    /// * `right` - Right border width
    /// * `top` - Top border height
    /// * `bot` - Bottom border height
    /// * `val` - Border pixel value
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + left + right, height + top + bot)`.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions would overflow.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u32,
    ) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let new_w = w
            .checked_add(left)
            .and_then(|v| v.checked_add(right))
            .ok_or_else(|| Error::InvalidParameter("border width overflow".into()))?;
        let new_h = h
            .checked_add(top)
            .and_then(|v| v.checked_add(bot))
            .ok_or_else(|| Error::InvalidParameter("border height overflow".into()))?;

        let out = Pix::new(new_w, new_h, self.depth())?;
        let mut out_mut = out.to_mut();
        out_mut.set_spp(self.spp());

        for y in 0..new_h {
            for x in 0..new_w {
                let inside = x >= left && x < left + w && y >= top && y < top + h;
                let v = if inside {
                    self.get_pixel_unchecked(x - left, y - top)
                } else {
                    val
                };
                out_mut.set_pixel_unchecked(x, y, v);
            }
        }

        Ok(out_mut.into())
    }

    /// Remove a uniform border from the image.
    ///
    /// # Arguments
    ///
    /// * `npix` - Border width to remove
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if border is larger than the image.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width to remove
    /// * `right` - Right border width to remove
    /// * `top` - Top border height to remove
    /// * `bot` - Bottom border height to remove
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - left - right, height - top - bot)`.
    ///
    /// # Errors
    ///
    /// Returns error if border is larger than the image.
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let new_w = w
            .checked_sub(left.saturating_add(right))
            .filter(|&v| v > 0)
            .ok_or(Error::InvalidDimension { width: 0, height: h })?;
        let new_h = h
            .checked_sub(top.saturating_add(bot))
            .filter(|&v| v > 0)
            .ok_or(Error::InvalidDimension {
                width: new_w,
                height: 0,
            })?;

        let out = Pix::new(new_w, new_h, self.depth())?;
        let mut out_mut = out.to_mut();
        out_mut.set_spp(self.spp());

        for y in 0..new_h {
            for x in 0..new_w {
                let v = self.get_pixel_unchecked(x + left, y + top);
                out_mut.set_pixel_unchecked(x, y, v);
            }
        }

        Ok(out_mut.into())
    }
}
