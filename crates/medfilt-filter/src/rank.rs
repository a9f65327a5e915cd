//! Rank filtering operations
//!
//! Provides rank (order-statistic) filters over square `(2r+1) x (2r+1)`
//! windows on 8 bpp grayscale images, including median, min, and max
//! filters. Three interchangeable algorithms compute the same result:
//!
//! - [`RankMethod::Sort`] selects from each window (O(r^2) per pixel)
//! - [`RankMethod::RowHistogram`] slides one histogram along each row (O(r))
//! - [`RankMethod::ColumnHistogram`] keeps per-column histograms (O(1) in r)
//!
//! Every method pads the input by edge replication, so the output has the
//! size of the input.

use crate::bands::run_bands;
use crate::grid::{GrayGrid, check_8bpp_gray};
use crate::{FilterError, FilterResult, huang, naive, perreault};
use medfilt_core::Pix;

/// Default window radius (3x3 window).
pub const DEFAULT_RADIUS: u32 = 1;
/// Default rank (median).
pub const DEFAULT_RANK: f32 = 0.5;
/// Largest accepted window radius.
pub const MAX_RADIUS: u32 = 4096;

/// Algorithm used to compute each window's order statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMethod {
    /// Partial sort of every window
    Sort,
    /// Sliding row histogram (Huang)
    RowHistogram,
    /// Per-column histograms (Perreault)
    #[default]
    ColumnHistogram,
}

/// Options for [`rank_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct RankFilterOptions {
    /// Window radius; the window is `2*radius + 1` pixels on a side
    pub radius: u32,
    /// Rank in [0.0, 1.0] (0.0 = min, 0.5 = median, 1.0 = max)
    pub rank: f32,
    /// Algorithm
    pub method: RankMethod,
}

impl Default for RankFilterOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            rank: DEFAULT_RANK,
            method: RankMethod::default(),
        }
    }
}

impl RankFilterOptions {
    /// Median filter options with the given radius.
    pub fn median(radius: u32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Set the rank.
    pub fn with_rank(mut self, rank: f32) -> Self {
        self.rank = rank;
        self
    }

    /// Set the algorithm.
    pub fn with_method(mut self, method: RankMethod) -> Self {
        self.method = method;
        self
    }

    fn validate(&self) -> FilterResult<()> {
        if self.radius == 0 || self.radius > MAX_RADIUS {
            return Err(FilterError::InvalidRadius {
                radius: self.radius,
                max: MAX_RADIUS,
            });
        }
        if !self.rank.is_finite() || !(0.0..=1.0).contains(&self.rank) {
            return Err(FilterError::InvalidParameters(format!(
                "rank must be in [0.0, 1.0], got {}",
                self.rank
            )));
        }
        Ok(())
    }
}

/// 0-based index of the sample selected by `rank` in a sorted window of
/// `window_size` samples.
///
/// Computed as `round(rank * (window_size - 1))`. For odd window sizes and
/// `rank == 0.5` this is `window_size / 2`, the median.
///
/// # Examples
///
/// ```
/// use medfilt_filter::rank_target;
///
/// assert_eq!(rank_target(9, 0.5), 4);
/// assert_eq!(rank_target(9, 0.0), 0);
/// assert_eq!(rank_target(9, 1.0), 8);
/// ```
pub fn rank_target(window_size: u32, rank: f32) -> u32 {
    if window_size == 0 {
        return 0;
    }
    let rank = f64::from(rank.clamp(0.0, 1.0));
    let target = (f64::from(window_size - 1) * rank).round() as u32;
    target.min(window_size - 1)
}

/// Apply a rank filter to an 8 bpp grayscale image.
///
/// # Errors
///
/// - [`FilterError::UnsupportedDepth`] / [`FilterError::UnsupportedSpp`] if
///   the input is not 8 bpp with one sample per pixel
/// - [`FilterError::InvalidRadius`] if `radius` is 0 or above [`MAX_RADIUS`]
/// - [`FilterError::InvalidParameters`] if `rank` is outside [0.0, 1.0]
///
/// # Examples
///
/// ```
/// use medfilt_core::Pix;
/// use medfilt_filter::{RankFilterOptions, RankMethod, rank_filter};
///
/// let pix = Pix::from_gray_bytes(3, 3, &[0, 0, 0, 0, 255, 0, 0, 0, 0]).unwrap();
/// let opts = RankFilterOptions::median(1).with_method(RankMethod::RowHistogram);
/// let out = rank_filter(&pix, &opts).unwrap();
/// assert!(out.to_gray_bytes().unwrap().iter().all(|&v| v == 0));
/// ```
pub fn rank_filter(pix: &Pix, options: &RankFilterOptions) -> FilterResult<Pix> {
    check_8bpp_gray(pix)?;
    options.validate()?;

    let radius = options.radius;
    let side = 2 * radius + 1;
    let target = rank_target(side * side, options.rank);
    let (w, h) = (pix.width(), pix.height());

    tracing::debug!(
        method = ?options.method,
        width = w,
        height = h,
        radius,
        rank = options.rank,
        target,
        "rank filter"
    );

    let grid = GrayGrid::padded(pix, radius)?;
    let r = radius as usize;
    let out_w = w as usize;
    let mut out = vec![0u8; out_w * h as usize];

    match options.method {
        RankMethod::Sort => run_bands(&mut out, out_w, |first_row, band| {
            naive::filter_band(&grid, r, target, first_row, band)
        }),
        RankMethod::RowHistogram => run_bands(&mut out, out_w, |first_row, band| {
            huang::filter_band(&grid, r, target, first_row, band)
        }),
        RankMethod::ColumnHistogram => run_bands(&mut out, out_w, |first_row, band| {
            perreault::filter_band(&grid, r, target, first_row, band)
        }),
    }

    Ok(Pix::from_gray_bytes(w, h, &out)?)
}

/// Apply a rank filter to an 8 bpp grayscale image using the default method.
///
/// # Arguments
/// * `pix` - Input 8 bpp grayscale image
/// * `radius` - Window radius
/// * `rank` - Rank value in [0.0, 1.0] (0.0=min, 0.5=median, 1.0=max)
pub fn rank_filter_gray(pix: &Pix, radius: u32, rank: f32) -> FilterResult<Pix> {
    rank_filter(pix, &RankFilterOptions::median(radius).with_rank(rank))
}

/// Apply median filter (rank = 0.5).
pub fn median_filter(pix: &Pix, radius: u32) -> FilterResult<Pix> {
    rank_filter_gray(pix, radius, 0.5)
}

/// Apply minimum filter (rank = 0.0).
pub fn min_filter(pix: &Pix, radius: u32) -> FilterResult<Pix> {
    rank_filter_gray(pix, radius, 0.0)
}

/// Apply maximum filter (rank = 1.0).
pub fn max_filter(pix: &Pix, radius: u32) -> FilterResult<Pix> {
    rank_filter_gray(pix, radius, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_target() {
        assert_eq!(rank_target(9, 0.5), 4);
        assert_eq!(rank_target(25, 0.5), 12);
        assert_eq!(rank_target(9, 0.4), 3);
        assert_eq!(rank_target(9, 0.0), 0);
        assert_eq!(rank_target(9, 1.0), 8);
        assert_eq!(rank_target(1, 0.7), 0);
    }

    #[test]
    fn test_options_default() {
        let opts = RankFilterOptions::default();
        assert_eq!(opts.radius, DEFAULT_RADIUS);
        assert_eq!(opts.rank, DEFAULT_RANK);
        assert_eq!(opts.method, RankMethod::ColumnHistogram);
    }

    #[test]
    fn test_options_validate() {
        assert!(RankFilterOptions::median(1).validate().is_ok());
        assert!(RankFilterOptions::median(MAX_RADIUS).validate().is_ok());
        assert!(matches!(
            RankFilterOptions::median(0).validate(),
            Err(FilterError::InvalidRadius { radius: 0, .. })
        ));
        assert!(RankFilterOptions::median(MAX_RADIUS + 1).validate().is_err());
        for bad in [-0.1, 1.5, f32::NAN, f32::INFINITY] {
            assert!(RankFilterOptions::median(1).with_rank(bad).validate().is_err());
        }
    }

    #[test]
    fn test_rank_filter_uniform() {
        let pix = Pix::from_gray_bytes(4, 3, &[9; 12]).unwrap();
        for method in [RankMethod::Sort, RankMethod::RowHistogram, RankMethod::ColumnHistogram] {
            let opts = RankFilterOptions::median(2).with_method(method);
            let out = rank_filter(&pix, &opts).unwrap();
            assert_eq!(out.width(), 4);
            assert_eq!(out.height(), 3);
            assert_eq!(out.to_gray_bytes().unwrap(), vec![9; 12]);
        }
    }
}
