//! medfilt-test - Regression test framework for medfilt
//!
//! This crate provides a small regression test framework, deterministic
//! synthetic images, and an independent reference implementation to compare
//! filters against.
//!
//! # Usage
//!
//! ```ignore
//! use medfilt_test::{RegParams, synth};
//!
//! let pix = synth::make_random(64, 48, 7)?;
//! let mut rp = RegParams::new("median");
//! rp.compare_pix(&expected, &actual);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod reference;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::RegParams;
pub use reference::{reference_median_filter, reference_rank_filter};
