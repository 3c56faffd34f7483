//! Session - one loaded grid and its analysis state
//!
//! A [`Session`] owns the pristine source pixels, the current working
//! grid, the luminance threshold, and (after [`Session::binarize`]) the
//! labeling. Operations are synchronous and single-threaded; one session
//! serves one loaded image at a time.
//!
//! Render calls replace the current grid, so sequencing matters: each
//! one starts from whatever the previous call produced. [`Session::reset`]
//! restores the source pixels and drops all derived state.

use blobscan_io::IoError;
use blobscan_label::{LabelError, Labeling, render};
use image::RgbImage;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the session API
#[derive(Debug, Error)]
pub enum SessionError {
    /// The source image could not be decoded
    #[error("image load error: {0}")]
    ImageLoad(#[from] IoError),

    /// A derived-state operation was invoked before a successful binarize
    #[error("{operation} called before a successful binarize")]
    InvalidState { operation: &'static str },

    /// The labeling pipeline failed
    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Luminance thresholds outside this range are rejected.
const THRESHOLD_RANGE: std::ops::RangeInclusive<f64> = 0.0..=255.0;

/// One loaded image and its labeling state.
#[derive(Debug, Clone)]
pub struct Session {
    path: Option<PathBuf>,
    source: RgbImage,
    current: RgbImage,
    threshold: f64,
    labeling: Option<Labeling>,
}

impl Session {
    /// Load a session from an image file.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ImageLoad`] if the path cannot be decoded.
    pub fn load<P: AsRef<Path>>(path: P) -> SessionResult<Self> {
        let path = path.as_ref();
        let source = blobscan_io::read_image(path)?;
        debug!(
            "loaded {}: {}x{}",
            path.display(),
            source.width(),
            source.height()
        );
        Ok(Self {
            path: Some(path.to_path_buf()),
            current: source.clone(),
            source,
            threshold: 0.0,
            labeling: None,
        })
    }

    /// Create a session from an already-decoded grid.
    pub fn from_image(image: RgbImage) -> Self {
        Self {
            path: None,
            current: image.clone(),
            source: image,
            threshold: 0.0,
            labeling: None,
        }
    }

    /// The path the session was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The current grid.
    pub fn image(&self) -> &RgbImage {
        &self.current
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.current.width()
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// The current luminance threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Set the luminance threshold.
    ///
    /// Accepts only values in `[0, 255]`. An out-of-range value is
    /// rejected: the previous threshold stays in effect and `false` is
    /// returned. This is defined behavior, not an error.
    pub fn set_threshold(&mut self, value: f64) -> bool {
        if !THRESHOLD_RANGE.contains(&value) {
            warn!(
                "threshold {} outside [0, 255], keeping {}",
                value, self.threshold
            );
            return false;
        }
        self.threshold = value;
        true
    }

    /// Binarize the current grid and run the labeling pipeline.
    ///
    /// The current grid is replaced by the black/white rendering; labels
    /// and geometry are recomputed from scratch, invalidating any prior
    /// analysis. To re-binarize from the original pixels, call
    /// [`reset`](Self::reset) first.
    pub fn binarize(&mut self) -> SessionResult<&RgbImage> {
        let (bw, labeling) = Labeling::analyze(&self.current, self.threshold)?;
        self.current = bw;
        self.labeling = Some(labeling);
        Ok(&self.current)
    }

    /// Number of distinct objects found by the last binarize.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidState`] before a successful
    /// [`binarize`](Self::binarize).
    pub fn count_components(&self) -> SessionResult<u32> {
        Ok(self.labeling("count_components")?.components())
    }

    /// Per-object geometry from the last binarize.
    pub fn geometry(&self) -> SessionResult<&[blobscan_label::ComponentGeometry]> {
        Ok(self.labeling("geometry")?.geometry())
    }

    /// Repaint every object in a random color.
    pub fn colorize(&mut self) -> SessionResult<&RgbImage> {
        self.render("colorize", render::colorize)
    }

    /// Outline every object's bounding box.
    pub fn highlight(&mut self) -> SessionResult<&RgbImage> {
        self.render("highlight", render::highlight)
    }

    /// Mark the smallest and largest objects in fixed colors.
    pub fn smallest_and_largest(&mut self) -> SessionResult<&RgbImage> {
        self.render("smallest_and_largest", render::mark_extremes)
    }

    /// Run one renderer against the current grid and make its output the
    /// new current grid.
    fn render(
        &mut self,
        operation: &'static str,
        transform: fn(&RgbImage, &Labeling) -> RgbImage,
    ) -> SessionResult<&RgbImage> {
        let labeling = self
            .labeling
            .as_ref()
            .ok_or(SessionError::InvalidState { operation })?;
        let rendered = transform(&self.current, labeling);
        self.current = rendered;
        Ok(&self.current)
    }

    /// Restore the original source pixels and drop all derived state.
    pub fn reset(&mut self) -> &RgbImage {
        self.current = self.source.clone();
        self.labeling = None;
        &self.current
    }

    fn labeling(&self, operation: &'static str) -> SessionResult<&Labeling> {
        self.labeling
            .as_ref()
            .ok_or(SessionError::InvalidState { operation })
    }
}
