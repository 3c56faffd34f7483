//! Labeling pipeline and its result
//!
//! [`Labeling`] ties the pipeline stages together: binarize, union
//! adjacent foreground sites, collect the distinct labels, extract
//! geometry. The result owns everything downstream renderers need and
//! is immutable; re-analyzing (e.g. with a new threshold) produces a
//! fresh `Labeling`.

use crate::binarize::binarize;
use crate::connect;
use crate::error::LabelResult;
use crate::geometry::{self, ComponentGeometry};
use blobscan_core::{DisjointGrid, Label};
use image::RgbImage;
use log::debug;
use std::collections::HashMap;

/// The result of analyzing one grid at one threshold.
///
/// Labels are held in first-encounter raster order; that order is fixed
/// for the lifetime of the analysis and indexes both the geometry list
/// and renderer color assignment.
#[derive(Debug, Clone)]
pub struct Labeling {
    dset: DisjointGrid,
    labels: Vec<Label>,
    index: HashMap<Label, usize>,
    geometry: Vec<ComponentGeometry>,
}

impl Labeling {
    /// Run the full labeling pipeline on a grid.
    ///
    /// Returns the black/white binarized grid together with the
    /// analysis. The input grid is not modified.
    ///
    /// # Errors
    ///
    /// Fails only for a grid with a zero dimension.
    pub fn analyze(image: &RgbImage, threshold: f64) -> LabelResult<(RgbImage, Labeling)> {
        let (bw, mut dset) = binarize(image, threshold)?;
        connect::analyze(&mut dset);
        let (labels, index) = collect_labels(&dset);
        let geometry = geometry::extract(&dset, &labels, &index);
        debug!(
            "labeled {} components in {}x{} grid at threshold {}",
            labels.len(),
            dset.width(),
            dset.height(),
            threshold
        );
        Ok((
            bw,
            Labeling {
                dset,
                labels,
                index,
                geometry,
            },
        ))
    }

    /// Number of distinct objects.
    #[inline]
    pub fn components(&self) -> u32 {
        self.labels.len() as u32
    }

    /// The distinct labels, in first-encounter raster order.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Per-object geometry, indexed in parallel with [`labels`](Self::labels).
    #[inline]
    pub fn geometry(&self) -> &[ComponentGeometry] {
        &self.geometry
    }

    /// Label of the object containing `(x, y)`, or `None` for background.
    #[inline]
    pub fn label_at(&self, x: u32, y: u32) -> Option<Label> {
        self.dset.root_at(x, y)
    }

    /// Position of a label in the fixed label order.
    #[inline]
    pub fn position_of(&self, label: Label) -> Option<usize> {
        self.index.get(&label).copied()
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.dset.width()
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.dset.height()
    }
}

/// Collect the distinct canonical labels present after analysis.
///
/// One scan of the flattened grid; each root is recorded the first time
/// it is seen, giving a deterministic order (unlike hash-set iteration).
fn collect_labels(dset: &DisjointGrid) -> (Vec<Label>, HashMap<Label, usize>) {
    let mut labels = Vec::new();
    let mut index = HashMap::new();

    for y in 0..dset.height() {
        for x in 0..dset.width() {
            let Some(label) = dset.root_at(x, y) else {
                continue;
            };
            index.entry(label).or_insert_with(|| {
                labels.push(label);
                labels.len() - 1
            });
        }
    }

    debug_assert_eq!(labels.len() as u32, dset.components());
    (labels, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const FG: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn collects_labels_in_raster_order() {
        let mut img = RgbImage::new(5, 3);
        // Objects encountered at (3,0), (0,1), (2,2).
        img.put_pixel(3, 0, FG);
        img.put_pixel(0, 1, FG);
        img.put_pixel(2, 2, FG);

        let (_, labeling) = Labeling::analyze(&img, 128.0).unwrap();
        assert_eq!(labeling.components(), 3);
        assert_eq!(labeling.labels()[0], labeling.label_at(3, 0).unwrap());
        assert_eq!(labeling.labels()[1], labeling.label_at(0, 1).unwrap());
        assert_eq!(labeling.labels()[2], labeling.label_at(2, 2).unwrap());
        for (i, &label) in labeling.labels().iter().enumerate() {
            assert_eq!(labeling.position_of(label), Some(i));
            assert_eq!(labeling.geometry()[i].label, label);
        }
    }

    #[test]
    fn geometry_matches_object_shape() {
        let mut img = RgbImage::new(6, 4);
        // 2x3 block with top-left at (1,1)
        for y in 1..=2 {
            for x in 1..=3 {
                img.put_pixel(x, y, FG);
            }
        }
        let (_, labeling) = Labeling::analyze(&img, 128.0).unwrap();
        assert_eq!(labeling.components(), 1);
        let g = &labeling.geometry()[0];
        assert_eq!((g.min_x, g.min_y, g.max_x, g.max_y), (1, 1, 3, 2));
        assert_eq!(g.pixel_count, 6);
        let b = g.bounds();
        assert_eq!((b.x, b.y, b.w, b.h), (1, 1, 3, 2));
    }

    #[test]
    fn repeated_analysis_is_deterministic() {
        let mut img = RgbImage::new(8, 8);
        for i in 0..8 {
            img.put_pixel(i, i % 4, FG);
        }
        let (bw1, l1) = Labeling::analyze(&img, 100.0).unwrap();
        let (bw2, l2) = Labeling::analyze(&img, 100.0).unwrap();
        assert_eq!(l1.components(), l2.components());
        assert_eq!(l1.labels(), l2.labels());
        assert_eq!(l1.geometry(), l2.geometry());
        assert_eq!(bw1.as_raw(), bw2.as_raw());
    }
}
