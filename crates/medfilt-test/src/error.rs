//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic image
    #[error("failed to build image '{name}': {source}")]
    ImageBuild {
        name: &'static str,
        #[source]
        source: medfilt_core::Error,
    },

    /// Invalid generator or reference parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
