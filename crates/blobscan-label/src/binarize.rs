//! Binarization
//!
//! Splits an RGB grid into foreground and background by luminance
//! threshold, producing the black/white grid and the union-find state
//! the connectivity pass operates on.

use crate::error::LabelResult;
use blobscan_core::{DisjointGrid, luminance};
use image::{Rgb, RgbImage};

/// Pure black, painted over background pixels.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
/// Pure white, painted over foreground pixels.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Binarize a grid against a luminance threshold.
///
/// Scans sites in raster order. A pixel with luminance below `threshold`
/// is background: painted black and excluded from the union-find. All
/// other pixels are foreground: painted white, each its own singleton
/// component. After this pass the live component count equals the number
/// of foreground pixels; the connectivity pass merges them down.
///
/// The input grid is not modified; a new black/white grid is returned
/// together with the initialized [`DisjointGrid`].
///
/// # Errors
///
/// Fails only for a grid with a zero dimension.
pub fn binarize(image: &RgbImage, threshold: f64) -> LabelResult<(RgbImage, DisjointGrid)> {
    let (width, height) = image.dimensions();
    let mut dset = DisjointGrid::new(width, height)?;
    let mut bw = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            if luminance(*image.get_pixel(x, y)) < threshold {
                bw.put_pixel(x, y, BLACK);
                dset.mark_background(x, y);
            } else {
                bw.put_pixel(x, y, WHITE);
                dset.mark_foreground(x, y);
            }
        }
    }

    Ok((bw, dset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_threshold() {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([200, 200, 200]));
        img.put_pixel(0, 0, Rgb([20, 20, 20]));

        let (bw, dset) = binarize(&img, 128.0).unwrap();
        assert_eq!(bw.get_pixel(0, 0), &BLACK);
        assert_eq!(bw.get_pixel(1, 0), &WHITE);
        assert!(!dset.is_foreground(0, 0));
        assert!(dset.is_foreground(1, 1));
        // Three foreground singletons remain live.
        assert_eq!(dset.components(), 3);
    }

    #[test]
    fn zero_threshold_keeps_everything_foreground() {
        let img = RgbImage::new(3, 3); // all black
        let (bw, dset) = binarize(&img, 0.0).unwrap();
        assert_eq!(dset.components(), 9);
        assert_eq!(bw.get_pixel(1, 1), &WHITE);
    }

    #[test]
    fn input_grid_is_untouched() {
        let img = RgbImage::from_pixel(2, 1, Rgb([90, 90, 90]));
        let _ = binarize(&img, 128.0).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([90, 90, 90]));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let img = RgbImage::new(0, 4);
        assert!(binarize(&img, 128.0).is_err());
    }
}
