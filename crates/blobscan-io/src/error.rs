//! I/O error types
//!
//! A single error type for image decode and encode. Format-specific
//! failures from the underlying decoder are wrapped together with the
//! path they occurred on, so callers only handle one error type.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be opened or decoded
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The image could not be encoded or written
    #[error("failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
