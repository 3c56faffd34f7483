//! Per-object geometry extraction
//!
//! Computes the inclusive bounding box and pixel count of every labeled
//! object in a single full-grid pass, accumulating all statistics per
//! label through a label-to-index map. Output order matches the label
//! order produced by the collector.

use blobscan_core::{Box, DisjointGrid, Label};
use std::collections::HashMap;

/// Geometry of one labeled object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentGeometry {
    /// Canonical label of the object
    pub label: Label,
    /// Smallest x coordinate of any object pixel
    pub min_x: u32,
    /// Largest x coordinate of any object pixel (inclusive)
    pub max_x: u32,
    /// Smallest y coordinate of any object pixel
    pub min_y: u32,
    /// Largest y coordinate of any object pixel (inclusive)
    pub max_y: u32,
    /// Number of pixels in the object
    pub pixel_count: u32,
}

impl ComponentGeometry {
    /// The object's axis-aligned bounding box.
    pub fn bounds(&self) -> Box {
        // min <= max by construction: every label has at least one pixel.
        Box::new(
            self.min_x,
            self.min_y,
            self.max_x - self.min_x + 1,
            self.max_y - self.min_y + 1,
        )
    }
}

/// Running accumulator for one label during the grid pass.
struct Accumulator {
    min_x: u32,
    max_x: u32,
    min_y: u32,
    max_y: u32,
    pixel_count: u32,
}

impl Accumulator {
    fn start(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
            pixel_count: 1,
        }
    }

    fn absorb(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
    }
}

/// Extract geometry for every label, one entry per label in `labels`
/// order.
///
/// `index` maps each label to its position in `labels`. Panics if a
/// foreground site carries a label missing from the map - by
/// construction the collector has seen every root, so that would be a
/// collector bug, not a valid geometry.
pub fn extract(
    dset: &DisjointGrid,
    labels: &[Label],
    index: &HashMap<Label, usize>,
) -> Vec<ComponentGeometry> {
    let mut accumulators: Vec<Option<Accumulator>> = labels.iter().map(|_| None).collect();

    for y in 0..dset.height() {
        for x in 0..dset.width() {
            let Some(label) = dset.root_at(x, y) else {
                continue;
            };
            let slot = &mut accumulators[index[&label]];
            match slot {
                Some(acc) => acc.absorb(x, y),
                None => *slot = Some(Accumulator::start(x, y)),
            }
        }
    }

    labels
        .iter()
        .zip(accumulators)
        .map(|(&label, acc)| {
            let acc = acc.expect("collected label with no sites");
            ComponentGeometry {
                label,
                min_x: acc.min_x,
                max_x: acc.max_x,
                min_y: acc.min_y,
                max_y: acc.max_y,
                pixel_count: acc.pixel_count,
            }
        })
        .collect()
}
