//! medfilt-filter - Sliding-window median and rank filters
//!
//! This crate provides order-statistic filters for 8 bpp grayscale images:
//!
//! - Border extension by edge replication
//! - Reference median filter by partial selection
//! - Row-histogram median filter (Huang), O(r) per pixel
//! - Column-histogram median filter (Perreault), O(1) per pixel in r
//! - General rank filtering (min, max, arbitrary rank) over any of the above
//!
//! All three median filters produce identical output for identical input.
//!
//! With the `parallel` feature, output rows are split into bands that are
//! filtered concurrently with rayon.

mod bands;
mod error;
pub mod extend;
mod grid;
mod histogram;
pub mod huang;
pub mod naive;
pub mod perreault;
pub mod rank;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use extend::extend_by_replication;
pub use huang::median_filter_huang;
pub use naive::median_filter_naive;
pub use perreault::median_filter_perreault;
pub use rank::{
    DEFAULT_RADIUS, DEFAULT_RANK, MAX_RADIUS, RankFilterOptions, RankMethod, max_filter,
    median_filter, min_filter, rank_filter, rank_filter_gray, rank_target,
};
