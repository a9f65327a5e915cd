//! Error types for medfilt-filter
//!
//! All errors are precondition violations detected before any work is done;
//! filtering itself cannot fail once the inputs are accepted.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] medfilt_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth {
        /// Expected depth description
        expected: &'static str,
        /// Actual depth in bits
        actual: u32,
    },

    /// Unsupported number of samples (channels) per pixel
    #[error("unsupported samples per pixel: expected {expected}, got {actual}")]
    UnsupportedSpp {
        /// Expected samples per pixel
        expected: u32,
        /// Actual samples per pixel
        actual: u32,
    },

    /// Window radius outside the accepted range
    #[error("invalid radius {radius}: must be in 1..={max}")]
    InvalidRadius {
        /// Requested radius
        radius: u32,
        /// Largest accepted radius
        max: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
