//! DisjointGrid - Weighted union-find over the sites of a 2-D grid
//!
//! Each pixel position of a `width x height` grid is a *site*. Sites are
//! either background (permanently inert) or foreground; foreground sites
//! are partitioned into connected components by repeated unions. The
//! canonical root of a component serves as its [`Label`].
//!
//! The structure is parameterized by the grid dimensions and its entire
//! API is `(x, y)`-based: the flattened site numbering is an internal
//! detail and never crosses the crate boundary. This removes the classic
//! hazard where sites adjacent in the flat array (end of one row, start
//! of the next) are mistaken for grid neighbors.
//!
//! `find` performs no path compression; compression happens once, in the
//! dedicated [`DisjointGrid::flatten`] pass after all unions are done.

use crate::error::{Error, Result};

/// Parent value marking a background site.
const BACKGROUND: i32 = -1;

/// Canonical identifier of one connected object.
///
/// Wraps the component's root site. Opaque on purpose: labels are only
/// compared, hashed, and mapped - never interpreted as positions. A label
/// is stable until the grid is re-binarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u32);

/// Weighted union-find over grid sites.
///
/// # Examples
///
/// ```
/// use blobscan_core::DisjointGrid;
///
/// let mut dset = DisjointGrid::new(3, 1).unwrap();
/// dset.mark_foreground(0, 0);
/// dset.mark_foreground(1, 0);
/// dset.mark_background(2, 0);
///
/// dset.union((0, 0), (1, 0));
/// assert!(dset.connected((0, 0), (1, 0)));
/// assert_eq!(dset.components(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointGrid {
    width: u32,
    height: u32,
    /// parent[site]: self for roots, another site while chained,
    /// `BACKGROUND` for inert sites.
    parent: Vec<i32>,
    /// Component size, valid only at roots.
    tree_size: Vec<u32>,
    /// Live component count: starts at `width * height`, decremented once
    /// per background assignment and once per successful union.
    live: u32,
}

impl DisjointGrid {
    /// Create a union-find structure for a `width x height` grid.
    ///
    /// Every site starts as a foreground singleton; callers classify each
    /// site exactly once with [`mark_foreground`](Self::mark_foreground) /
    /// [`mark_background`](Self::mark_background) during binarization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// the site count does not fit the parent encoding.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let dimension = u64::from(width) * u64::from(height);
        if width == 0 || height == 0 || dimension > i32::MAX as u64 {
            return Err(Error::InvalidDimension { width, height });
        }
        let dimension = dimension as usize;
        let parent: Vec<i32> = (0..dimension as i32).collect();
        Ok(Self {
            width,
            height,
            parent,
            tree_size: vec![1; dimension],
            live: dimension as u32,
        })
    }

    /// Get the grid width in sites.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in sites.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of sites.
    #[inline]
    pub fn dimension(&self) -> u32 {
        self.parent.len() as u32
    }

    /// Get the live component count.
    ///
    /// After binarization this is the number of foreground sites; after
    /// connectivity analysis it is the number of distinct objects.
    #[inline]
    pub fn components(&self) -> u32 {
        self.live
    }

    /// Flattened site index for `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid. Out-of-range access is a
    /// programming error, not a recoverable condition.
    #[inline]
    fn site(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "site ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Mark the site at `(x, y)` as background.
    ///
    /// Background sites are excluded from all further operations; the
    /// live component count drops by one.
    pub fn mark_background(&mut self, x: u32, y: u32) {
        let site = self.site(x, y);
        if self.parent[site] != BACKGROUND {
            self.parent[site] = BACKGROUND;
            self.live -= 1;
        }
    }

    /// Mark the site at `(x, y)` as a foreground singleton.
    pub fn mark_foreground(&mut self, x: u32, y: u32) {
        let site = self.site(x, y);
        self.parent[site] = site as i32;
        self.tree_size[site] = 1;
    }

    /// Check whether the site at `(x, y)` is foreground.
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.parent[self.site(x, y)] != BACKGROUND
    }

    /// Walk parent pointers from `site` to its root. No path compression.
    fn find(&self, mut site: usize) -> usize {
        assert!(
            self.parent[site] != BACKGROUND,
            "find on background site {}",
            site
        );
        while self.parent[site] != site as i32 {
            site = self.parent[site] as usize;
        }
        site
    }

    /// Check whether two foreground sites are in the same component.
    ///
    /// # Panics
    ///
    /// Panics if either site is out of range or background; callers gate
    /// on [`is_foreground`](Self::is_foreground) first.
    pub fn connected(&self, p: (u32, u32), q: (u32, u32)) -> bool {
        self.find(self.site(p.0, p.1)) == self.find(self.site(q.0, q.1))
    }

    /// Merge the components containing the foreground sites `p` and `q`.
    ///
    /// No-op if already connected. Otherwise the smaller tree's root is
    /// attached under the larger tree's root (union by size, ties toward
    /// `q`'s root) and the live component count drops by one.
    ///
    /// # Panics
    ///
    /// Panics if either site is out of range or background.
    pub fn union(&mut self, p: (u32, u32), q: (u32, u32)) {
        let root_p = self.find(self.site(p.0, p.1));
        let root_q = self.find(self.site(q.0, q.1));
        if root_p == root_q {
            return;
        }

        if self.tree_size[root_p] <= self.tree_size[root_q] {
            self.parent[root_p] = root_q as i32;
            self.tree_size[root_q] += self.tree_size[root_p];
        } else {
            self.parent[root_q] = root_p as i32;
            self.tree_size[root_p] += self.tree_size[root_q];
        }
        self.live -= 1;
    }

    /// Collapse every foreground site's stored parent to its canonical
    /// root, so later lookups are single-hop.
    pub fn flatten(&mut self) {
        for site in 0..self.parent.len() {
            if self.parent[site] != BACKGROUND {
                self.parent[site] = self.find(site) as i32;
            }
        }
    }

    /// Get the canonical label of the component containing `(x, y)`, or
    /// `None` for a background site.
    pub fn root_at(&self, x: u32, y: u32) -> Option<Label> {
        let site = self.site(x, y);
        if self.parent[site] == BACKGROUND {
            return None;
        }
        Some(Label(self.find(site) as u32))
    }
}
