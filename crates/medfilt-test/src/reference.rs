//! Independent reference filters
//!
//! Written to be as simple as possible, to validate faster versions against.
//! Out-of-range coordinates are clamped directly instead of going through a
//! border-extended copy, so the border handling is checked independently of
//! the code under test.

use crate::error::{TestError, TestResult};
use medfilt_core::{Pix, PixelDepth};

/// Output the `rank_index`-th smallest sample of every clamped window.
///
/// # Arguments
///
/// * `pix` - 8 bpp grayscale input
/// * `radius` - Window half-size; the window side is `2 * radius + 1`
/// * `rank_index` - 0-based position in the sorted window
pub fn reference_rank_filter(pix: &Pix, radius: u32, rank_index: usize) -> TestResult<Pix> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(TestError::InvalidParameters(format!(
            "reference filter needs 8 bpp, got {}",
            pix.depth().bits()
        )));
    }
    let side = 2 * radius as usize + 1;
    if rank_index >= side * side {
        return Err(TestError::InvalidParameters(format!(
            "rank index {rank_index} outside window of {}",
            side * side
        )));
    }

    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let r = radius as i64;
    let mut out = pix.create_template().to_mut();
    let mut neighbors = Vec::with_capacity(side * side);

    for y in 0..h {
        for x in 0..w {
            neighbors.clear();
            for dy in -r..=r {
                let py = (y + dy).clamp(0, h - 1) as u32;
                for dx in -r..=r {
                    let px = (x + dx).clamp(0, w - 1) as u32;
                    neighbors.push(pix.get_pixel_unchecked(px, py));
                }
            }
            neighbors.sort_unstable();
            out.set_pixel_unchecked(x as u32, y as u32, neighbors[rank_index]);
        }
    }

    Ok(out.into())
}

/// Lower median of every clamped `(2r+1)²` window.
pub fn reference_median_filter(pix: &Pix, radius: u32) -> TestResult<Pix> {
    let side = 2 * radius as usize + 1;
    reference_rank_filter(pix, radius, side * side / 2)
}
