//! Column-histogram rank filter (Perreault)
//!
//! One histogram per padded column covers the `2r+1` rows of the current
//! window band. Moving right along a row slides the entering column down one
//! row (two sample updates) and then swaps whole column histograms in and out
//! of the window histogram, so the per-pixel cost is independent of `r`.
//!
//! The scan is a value object: a [`ColumnScan`] starts at column 0 of some
//! first row and yields output values in raster order, one per call.

use crate::grid::GrayGrid;
use crate::histogram::{Histogram, RankTracker};
use crate::rank::{RankFilterOptions, RankMethod, rank_filter};
use crate::FilterResult;
use medfilt_core::Pix;

/// Median filter using per-column histograms.
///
/// Produces the same output as [`median_filter_naive`](crate::median_filter_naive)
/// and [`median_filter_huang`](crate::median_filter_huang).
///
/// # Errors
///
/// Fails if the input is not 8 bpp with one sample per pixel, or if `radius`
/// is 0 or too large.
pub fn median_filter_perreault(pix: &Pix, radius: u32) -> FilterResult<Pix> {
    rank_filter(
        pix,
        &RankFilterOptions::median(radius).with_method(RankMethod::ColumnHistogram),
    )
}

/// Scan state over a padded grid.
struct ColumnScan<'a> {
    grid: &'a GrayGrid,
    radius: usize,
    out_width: usize,
    /// Column histograms, one per padded column
    columns: Vec<Histogram>,
    window: Histogram,
    tracker: RankTracker,
    first_row: usize,
    /// Output row of the next value
    row: usize,
    /// Output column of the next value
    col: usize,
}

impl<'a> ColumnScan<'a> {
    /// Start a scan at output row `first_row`.
    ///
    /// Column histograms are filled from padded rows
    /// `first_row..=first_row + 2r`.
    fn new(grid: &'a GrayGrid, radius: usize, target: u32, first_row: usize) -> Self {
        debug_assert!(first_row + 2 * radius < grid.height());
        let columns = (0..grid.width())
            .map(|x| {
                let mut hist = Histogram::new();
                for y in first_row..=first_row + 2 * radius {
                    hist.add(grid.get(x, y));
                }
                hist
            })
            .collect();

        Self {
            grid,
            radius,
            out_width: grid.width() - 2 * radius,
            columns,
            window: Histogram::new(),
            tracker: RankTracker::new(target),
            first_row,
            row: first_row,
            col: 0,
        }
    }

    /// Produce the value at the cursor and advance it in raster order.
    fn next_value(&mut self) -> u8 {
        let value = if self.col == 0 {
            self.start_row()
        } else {
            self.step_right()
        };
        self.col += 1;
        if self.col == self.out_width {
            self.col = 0;
            self.row += 1;
        }
        value
    }

    /// Move column `x` from padded rows `row-1..row+2r-1` to `row..=row+2r`.
    fn slide_column_down(&mut self, x: usize) {
        let leaving = self.grid.get(x, self.row - 1);
        let entering = self.grid.get(x, self.row + 2 * self.radius);
        let column = &mut self.columns[x];
        column.remove(leaving);
        column.add(entering);
    }

    fn start_row(&mut self) -> u8 {
        let side = 2 * self.radius + 1;
        if self.row > self.first_row {
            for x in 0..side {
                self.slide_column_down(x);
            }
        }
        self.window.clear();
        for column in &self.columns[..side] {
            self.window.accumulate(column);
        }
        self.tracker.reset(&self.window)
    }

    fn step_right(&mut self) -> u8 {
        let incoming = self.col + 2 * self.radius;
        let outgoing = self.col - 1;
        if self.row > self.first_row {
            self.slide_column_down(incoming);
        }
        let (added, removed) = self.window.exchange(
            &self.columns[incoming],
            &self.columns[outgoing],
            self.tracker.value() as usize,
        );
        self.tracker.shift_below(added, removed);
        self.tracker.walk(&self.window)
    }

    /// Fill `band` with consecutive values.
    fn run(mut self, band: &mut [u8]) {
        for out in band.iter_mut() {
            *out = self.next_value();
        }
    }
}

pub(crate) fn filter_band(
    grid: &GrayGrid,
    radius: usize,
    target: u32,
    first_row: usize,
    band: &mut [u8],
) {
    ColumnScan::new(grid, radius, target, first_row).run(band);
}
