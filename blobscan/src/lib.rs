//! blobscan - Connected-component labeling for 2-D pixel grids
//!
//! Binarize an RGB image by luminance threshold, partition the
//! foreground into 4-connected objects with a weighted union-find,
//! extract per-object geometry, and render derived views: random
//! per-object coloring, bounding-box highlighting, and smallest/largest
//! marking.
//!
//! The [`Session`] type is the top-level API a UI or CLI drives; the
//! underlying pipeline stages live in the domain crates re-exported
//! below.
//!
//! # Example
//!
//! ```
//! use blobscan::Session;
//! use image::{Rgb, RgbImage};
//!
//! let mut img = RgbImage::new(6, 6);
//! img.put_pixel(1, 1, Rgb([255, 255, 255]));
//! img.put_pixel(4, 4, Rgb([255, 255, 255]));
//!
//! let mut session = Session::from_image(img);
//! assert!(session.set_threshold(128.0));
//! session.binarize().unwrap();
//! assert_eq!(session.count_components().unwrap(), 2);
//! ```

pub mod session;

// Re-export core types (primary data structures used everywhere)
pub use blobscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use blobscan_io as io;
pub use blobscan_label as label;

pub use label::{ComponentGeometry, Labeling};
pub use session::{Session, SessionError, SessionResult};
