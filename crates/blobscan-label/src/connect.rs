//! Connectivity analysis
//!
//! Two-pass raster scan over a binarized grid. The first pass unions
//! 4-adjacent foreground sites (up and left neighbors only - by the time
//! a site is visited its right and down neighbors have not been scanned
//! yet). The second pass flattens every foreground site's parent to its
//! canonical root so downstream consumers get single-hop lookups.
//!
//! Adjacency is decided from explicit `(x, y)` coordinates: the left
//! neighbor is only considered when `x > 0`, so the last site of one row
//! never connects to the first site of the next.

use blobscan_core::DisjointGrid;

/// Union adjacent foreground sites and flatten labels to canonical roots.
///
/// After this call the live count of `dset` is the number of distinct
/// objects in the grid.
pub fn analyze(dset: &mut DisjointGrid) {
    let width = dset.width();
    let height = dset.height();

    // Pass 1: union along the scan.
    for y in 0..height {
        for x in 0..width {
            if !dset.is_foreground(x, y) {
                continue;
            }
            if x > 0 && dset.is_foreground(x - 1, y) {
                dset.union((x - 1, y), (x, y));
            }
            if y > 0 && x > 0 {
                let top = dset.is_foreground(x, y - 1);
                let left = dset.is_foreground(x - 1, y);
                if top && left {
                    dset.union((x, y - 1), (x, y));
                    dset.union((x, y - 1), (x - 1, y));
                } else if top {
                    dset.union((x, y - 1), (x, y));
                }
            }
        }
    }

    // Pass 2: collapse parent chains.
    dset.flatten();
}
