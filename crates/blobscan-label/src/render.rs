//! Derived renderings of a labeled grid
//!
//! Three independent transforms over (grid, labeling): random per-object
//! coloring, bounding-box highlighting, and smallest/largest marking.
//! Each returns a new grid derived from the one passed in; none composes
//! automatically with another, so sequencing is the caller's choice.

use crate::labeling::Labeling;
use image::{Rgb, RgbImage};
use rand::{Rng, RngExt};

/// Outline color for bounding-box highlighting.
pub const HIGHLIGHT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Fill color for the smallest object.
pub const SMALLEST_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Fill color for the largest object.
pub const LARGEST_COLOR: Rgb<u8> = Rgb([0, 176, 80]);

/// Draw one pseudo-random color from three independent uniform `[0, 1)`
/// channel draws.
fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    let r = (rng.random::<f32>() * 255.0) as u8;
    let g = (rng.random::<f32>() * 255.0) as u8;
    let b = (rng.random::<f32>() * 255.0) as u8;
    Rgb([r, g, b])
}

/// Repaint every object in a random color.
///
/// One color is drawn per label, in label order; every pixel bearing
/// that label is repainted. Background pixels are untouched. Colors are
/// not guaranteed distinct between labels - collisions are accepted.
pub fn colorize_with<R: Rng + ?Sized>(
    image: &RgbImage,
    labeling: &Labeling,
    rng: &mut R,
) -> RgbImage {
    let colors: Vec<Rgb<u8>> = labeling.labels().iter().map(|_| random_color(rng)).collect();

    let mut out = image.clone();
    for y in 0..labeling.height() {
        for x in 0..labeling.width() {
            let Some(label) = labeling.label_at(x, y) else {
                continue;
            };
            if let Some(i) = labeling.position_of(label) {
                out.put_pixel(x, y, colors[i]);
            }
        }
    }
    out
}

/// [`colorize_with`] using the thread-local RNG.
pub fn colorize(image: &RgbImage, labeling: &Labeling) -> RgbImage {
    colorize_with(image, labeling, &mut rand::rng())
}

/// Draw a one-pixel-wide rectangle outline around every object's
/// bounding box.
///
/// All four sides are painted, corners included. Pixels strictly inside
/// or outside a box keep their current color.
pub fn highlight(image: &RgbImage, labeling: &Labeling) -> RgbImage {
    let mut out = image.clone();
    for g in labeling.geometry() {
        for x in g.min_x..=g.max_x {
            out.put_pixel(x, g.min_y, HIGHLIGHT_COLOR);
            out.put_pixel(x, g.max_y, HIGHLIGHT_COLOR);
        }
        for y in g.min_y..=g.max_y {
            out.put_pixel(g.min_x, y, HIGHLIGHT_COLOR);
            out.put_pixel(g.max_x, y, HIGHLIGHT_COLOR);
        }
    }
    out
}

/// Repaint the smallest object and the largest object in fixed colors.
///
/// Extremes are decided by pixel count; on ties the first label in label
/// order wins. The smallest object is painted first, so when a single
/// object is both extremes it ends up in [`LARGEST_COLOR`]. A grid with
/// no objects is returned unchanged.
pub fn mark_extremes(image: &RgbImage, labeling: &Labeling) -> RgbImage {
    let geometry = labeling.geometry();
    let mut out = image.clone();
    if geometry.is_empty() {
        return out;
    }

    let mut smallest = 0usize;
    let mut largest = 0usize;
    for (i, g) in geometry.iter().enumerate() {
        if g.pixel_count < geometry[smallest].pixel_count {
            smallest = i;
        }
        if g.pixel_count > geometry[largest].pixel_count {
            largest = i;
        }
    }

    let smallest_label = geometry[smallest].label;
    let largest_label = geometry[largest].label;
    for y in 0..labeling.height() {
        for x in 0..labeling.width() {
            let Some(label) = labeling.label_at(x, y) else {
                continue;
            };
            if label == smallest_label {
                out.put_pixel(x, y, SMALLEST_COLOR);
            }
            if label == largest_label {
                out.put_pixel(x, y, LARGEST_COLOR);
            }
        }
    }
    out
}
