//! medfilt - Sliding-window median filters for Rust
//!
//! Three median filters over 8 bpp single-channel images, all with output
//! of the input's size and edge-replicated borders:
//!
//! - [`filter::median_filter_naive`] - partial selection per window
//! - [`filter::median_filter_huang`] - sliding row histogram, O(r) per pixel
//! - [`filter::median_filter_perreault`] - column histograms, O(1) per pixel
//!
//! Each is a thin wrapper over [`filter::rank_filter`], which also computes
//! min, max, and arbitrary rank filters.
//!
//! # Example
//!
//! ```
//! use medfilt::Pix;
//! use medfilt::filter::{median_filter_huang, median_filter_perreault};
//!
//! let pix = Pix::from_gray_bytes(3, 3, &[
//!     0, 0, 0,
//!     0, 255, 0,
//!     0, 0, 0,
//! ]).unwrap();
//!
//! let out = median_filter_perreault(&pix, 1).unwrap();
//! assert_eq!(out.to_gray_bytes().unwrap(), vec![0; 9]);
//! assert!(out.equals(&median_filter_huang(&pix, 1).unwrap()));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use medfilt_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use medfilt_filter as filter;
