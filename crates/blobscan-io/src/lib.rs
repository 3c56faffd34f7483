//! blobscan-io - Image file I/O
//!
//! Decode an image file into the RGB grid the labeling pipeline consumes,
//! and write a grid back out. Format detection, decoding, and encoding are
//! delegated wholesale to the `image` crate; this crate only normalizes
//! everything to `RgbImage` and attaches path context to failures.

pub mod error;

pub use error::{IoError, IoResult};

use image::RgbImage;
use std::path::Path;

/// Read an image from a file path as an RGB grid.
///
/// Any color type the decoder produces (gray, indexed, alpha) is
/// converted to 8-bit RGB.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the file cannot be opened or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgb8())
}

/// Write an RGB grid to a file path.
///
/// The output format is inferred from the path extension.
///
/// # Errors
///
/// Returns [`IoError::Write`] if encoding or writing fails.
pub fn write_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> IoResult<()> {
    let path = path.as_ref();
    image.save(path).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
