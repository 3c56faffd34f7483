//! Error types for blobscan-label

use thiserror::Error;

/// Errors that can occur during labeling
#[derive(Debug, Error)]
pub enum LabelError {
    /// Core structure error (invalid grid dimensions)
    #[error("core error: {0}")]
    Core(#[from] blobscan_core::Error),
}

/// Result type for labeling operations
pub type LabelResult<T> = Result<T, LabelError>;
