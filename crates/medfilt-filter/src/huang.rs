//! Row-histogram rank filter (Huang)
//!
//! One 256-bin histogram covers the current window. The first pixel of each
//! output row builds it from scratch; every following pixel of the row swaps
//! one column of `2r+1` samples out and one in, then lets the
//! [`RankTracker`] walk to the new value. Cost is O(r) per pixel.

use crate::grid::GrayGrid;
use crate::histogram::{Histogram, RankTracker};
use crate::rank::{RankFilterOptions, RankMethod, rank_filter};
use crate::FilterResult;
use medfilt_core::Pix;

/// Median filter using a sliding row histogram.
///
/// # Errors
///
/// Fails if the input is not 8 bpp with one sample per pixel, or if `radius`
/// is 0 or too large.
pub fn median_filter_huang(pix: &Pix, radius: u32) -> FilterResult<Pix> {
    rank_filter(
        pix,
        &RankFilterOptions::median(radius).with_method(RankMethod::RowHistogram),
    )
}

/// Window histogram sliding along one output row.
struct RowWindow<'a> {
    grid: &'a GrayGrid,
    radius: usize,
    hist: Histogram,
    tracker: RankTracker,
}

impl<'a> RowWindow<'a> {
    fn new(grid: &'a GrayGrid, radius: usize, target: u32) -> Self {
        Self {
            grid,
            radius,
            hist: Histogram::new(),
            tracker: RankTracker::new(target),
        }
    }

    /// Build the window at `(i, 0)` from scratch.
    fn first_in_row(&mut self, i: usize) -> u8 {
        let side = 2 * self.radius + 1;
        self.hist.clear();
        for y in i..i + side {
            for &v in &self.grid.row(y)[..side] {
                self.hist.add(v);
            }
        }
        self.tracker.reset(&self.hist)
    }

    /// Slide the window from `(i, j-1)` to `(i, j)`.
    fn next_in_row(&mut self, i: usize, j: usize) -> u8 {
        let outgoing_col = j - 1;
        let incoming_col = j + 2 * self.radius;
        for y in i..=i + 2 * self.radius {
            let row = self.grid.row(y);
            let outgoing = row[outgoing_col];
            let incoming = row[incoming_col];
            self.hist.remove(outgoing);
            self.tracker.remove(outgoing);
            self.hist.add(incoming);
            self.tracker.insert(incoming);
        }
        self.tracker.walk(&self.hist)
    }
}

pub(crate) fn filter_band(
    grid: &GrayGrid,
    radius: usize,
    target: u32,
    first_row: usize,
    band: &mut [u8],
) {
    let out_w = grid.width() - 2 * radius;
    let mut window = RowWindow::new(grid, radius, target);

    for (dy, out_row) in band.chunks_exact_mut(out_w).enumerate() {
        let i = first_row + dy;
        out_row[0] = window.first_in_row(i);
        for (j, out) in out_row.iter_mut().enumerate().skip(1) {
            *out = window.next_in_row(i, j);
        }
    }
}
