//! Error types for the command-line converter.

use std::io;
use std::path::PathBuf;
use stl2wrl::ConvertError;
use thiserror::Error;

/// Errors that can occur while converting files on disk.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("Cannot read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
