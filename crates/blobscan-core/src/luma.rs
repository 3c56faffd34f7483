//! Luminance computation
//!
//! Perceptual brightness of an RGB color, used to split a grid into
//! foreground and background during binarization.

use image::Rgb;

/// Rec. 601 luma weights for the red, green, and blue channels.
const WEIGHTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// Compute the perceptual luminance of a color in `[0.0, 255.0]`.
///
/// `L = 0.299 R + 0.587 G + 0.114 B`
#[inline]
pub fn luminance(color: Rgb<u8>) -> f64 {
    let Rgb([r, g, b]) = color;
    WEIGHTS.0 * f64::from(r) + WEIGHTS.1 * f64::from(g) + WEIGHTS.2 * f64::from(b)
}
