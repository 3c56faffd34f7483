//! blobscan-core - Basic data structures for component labeling
//!
//! This crate provides the fundamental data structures used throughout
//! the blobscan connected-component labeling library:
//!
//! - [`DisjointGrid`] - Weighted union-find over the sites of a 2-D grid
//! - [`Label`] - Opaque identifier for one connected object
//! - [`Box`] - Rectangle regions (bounding boxes)
//! - [`luminance`] - Perceptual brightness of an RGB color
//!
//! The pixel grid itself is `image::RgbImage`; this crate only adds the
//! structures the labeling pipeline layers on top of it.

pub mod box_;
pub mod dset;
pub mod error;
pub mod luma;

pub use box_::Box;
pub use dset::{DisjointGrid, Label};
pub use error::{Error, Result};
pub use luma::luminance;
