//! blobscan-label - Connected-component labeling pipeline
//!
//! This crate turns an RGB grid into labeled objects and derived views:
//!
//! - **Binarization** - luminance threshold split into foreground/background
//! - **Connectivity analysis** - two-pass 4-neighbor union-find labeling
//! - **Geometry extraction** - per-object bounding box and pixel count
//! - **Rendering** - random coloring, bounding-box highlighting,
//!   smallest/largest marking
//!
//! The stages run in a fixed forward order and are tied together by
//! [`Labeling::analyze`]; every stage consumes the previous stage's output
//! and returns new values instead of mutating shared state.
//!
//! # Examples
//!
//! ```
//! use blobscan_label::Labeling;
//! use image::{Rgb, RgbImage};
//!
//! // Two isolated white pixels on black
//! let mut img = RgbImage::new(5, 5);
//! img.put_pixel(1, 1, Rgb([255, 255, 255]));
//! img.put_pixel(3, 3, Rgb([255, 255, 255]));
//!
//! let (bw, labeling) = Labeling::analyze(&img, 128.0).unwrap();
//! assert_eq!(labeling.components(), 2);
//! assert_eq!(bw.get_pixel(0, 0), &Rgb([0, 0, 0]));
//! ```

pub mod binarize;
pub mod connect;
pub mod error;
pub mod geometry;
pub mod labeling;
pub mod render;

// Re-export core types
pub use blobscan_core;

pub use binarize::binarize;
pub use error::{LabelError, LabelResult};
pub use geometry::ComponentGeometry;
pub use labeling::Labeling;
pub use render::{
    HIGHLIGHT_COLOR, LARGEST_COLOR, SMALLEST_COLOR, colorize, colorize_with, highlight,
    mark_extremes,
};
