//! Error types for STL parsing.

use thiserror::Error;

/// Errors that can occur while reading an ASCII STL stream.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Invalid scaling factor: {0}")]
    InvalidScalingFactor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
