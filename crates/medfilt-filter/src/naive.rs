//! Reference rank filter by partial selection
//!
//! Every output pixel copies its full `(2r+1)^2` window into a scratch buffer
//! and selects the target order statistic. Cost is O(r^2) per pixel; this is
//! the baseline the histogram filters are checked against.

use crate::grid::GrayGrid;
use crate::rank::{RankFilterOptions, RankMethod, rank_filter};
use crate::FilterResult;
use medfilt_core::Pix;

/// Median filter by sorting each window.
///
/// Output has the size of the input; borders are handled by edge replication.
///
/// # Errors
///
/// Fails if the input is not 8 bpp with one sample per pixel, or if `radius`
/// is 0 or too large.
pub fn median_filter_naive(pix: &Pix, radius: u32) -> FilterResult<Pix> {
    rank_filter(pix, &RankFilterOptions::median(radius).with_method(RankMethod::Sort))
}

pub(crate) fn filter_band(
    grid: &GrayGrid,
    radius: usize,
    target: u32,
    first_row: usize,
    band: &mut [u8],
) {
    let side = 2 * radius + 1;
    let out_w = grid.width() - 2 * radius;
    let mut window = Vec::with_capacity(side * side);

    for (dy, out_row) in band.chunks_exact_mut(out_w).enumerate() {
        let i = first_row + dy;
        for (j, out) in out_row.iter_mut().enumerate() {
            window.clear();
            for y in i..i + side {
                window.extend_from_slice(&grid.row(y)[j..j + side]);
            }
            let (_, nth, _) = window.select_nth_unstable(target as usize);
            *out = *nth;
        }
    }
}
