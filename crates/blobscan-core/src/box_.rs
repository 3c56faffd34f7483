//! Box - Rectangle regions
//!
//! Axis-aligned rectangles, used for the bounding boxes of labeled
//! objects. A box produced by the geometry pass always covers at least
//! one pixel.

use crate::error::{Error, Result};

/// A rectangle region
///
/// Small Copy type; `x`/`y` is the top-left corner, `w`/`h` the extent
/// in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Box {
    /// Create a new box
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box from an inclusive coordinate span.
    ///
    /// `(min_x, min_y)` and `(max_x, max_y)` are both inside the box, so
    /// the resulting width is `max_x - min_x + 1` (same for height).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a minimum exceeds its maximum.
    pub fn from_span(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Result<Self> {
        if min_x > max_x || min_y > max_y {
            return Err(Error::InvalidParameter(format!(
                "inverted span: x {}..{} y {}..{}",
                min_x, max_x, min_y, max_y
            )));
        }
        Ok(Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        })
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the largest x coordinate inside the box.
    ///
    /// Only meaningful for non-empty boxes.
    #[inline]
    pub fn max_x(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }

    /// Get the largest y coordinate inside the box.
    #[inline]
    pub fn max_y(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }

    /// Get the area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if a point lies on the one-pixel-wide perimeter of the box
    pub fn on_perimeter(&self, x: u32, y: u32) -> bool {
        if !self.contains_point(x, y) {
            return false;
        }
        x == self.x || x == self.max_x() || y == self.y || y == self.max_y()
    }
}
