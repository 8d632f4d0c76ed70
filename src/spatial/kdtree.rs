//! KD-tree built by successive insertion.
//!
//! A KD-tree is a binary space partition over K-dimensional points. The node
//! at depth `d` splits on axis `d % K`: everything in its left subtree is
//! strictly smaller on that axis, everything in its right subtree is greater
//! or equal. The tree is never rebalanced, so its shape is purely a function
//! of insertion order.
//!
//! # Example
//!
//! ```
//! use kdindex::KdTree;
//!
//! let mut tree = KdTree::<i32>::new(2);
//! for p in [[3, 6], [17, 15], [13, 15], [6, 12], [9, 1], [2, 7], [10, 19]] {
//!     tree.insert(&p)?;
//! }
//!
//! assert!(tree.search(&[3, 6])?);
//! assert!(!tree.search(&[7, 8])?);
//! assert_eq!(tree.nearest_neighbor(&[7, 8])?, &[6, 12]);
//! assert_eq!(tree.range_search(&[5, 5], &[15, 15])?.len(), 2);
//! # Ok::<(), kdindex::KdError>(())
//! ```

use crate::coordinate::Coordinate;
use crate::error::{KdError, Result};
use tracing::{debug, trace};

/// Height interval at which a degenerate-insertion warning is logged.
const DEEP_TREE_STRIDE: usize = 4096;

/// A node in the KD-tree arena.
///
/// The node's point lives in the tree's coordinate buffer at the same index.
#[derive(Debug, Clone)]
pub(super) struct KdNode {
    /// The axis along which this node splits (depth mod K).
    pub(super) axis: usize,
    /// Left child (points strictly smaller on `axis`).
    pub(super) left: Option<usize>,
    /// Right child (points greater or equal on `axis`).
    pub(super) right: Option<usize>,
}

impl KdNode {
    /// Orders the children as (near, far) for a query whose value on this
    /// node's axis is `below` the split or not.
    #[inline]
    pub(super) fn near_far(&self, below: bool) -> (Option<usize>, Option<usize>) {
        if below {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}

/// A K-dimensional tree for exact, nearest-neighbor, and range queries.
///
/// Points are copied into the tree on insertion. Nodes are kept in an arena
/// addressed by index, with all coordinates packed into a single buffer, so
/// neither traversal nor teardown recurses no matter how unbalanced the tree
/// becomes.
///
/// # Complexity
///
/// - Insert / search: O(height), O(log n) for random insertion order
/// - Nearest neighbor: O(log n) average, O(n) worst case
/// - Range query: O(n^(1-1/K) + m) average where m is the number of results
///
/// Sorted insertion degenerates the tree into a list of height n.
#[derive(Debug, Clone)]
pub struct KdTree<T> {
    nodes: Vec<KdNode>,
    coords: Vec<T>,
    dimensions: usize,
    height: usize,
}

impl<T: Coordinate> KdTree<T> {
    /// Creates an empty tree over points with `dimensions` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `dimensions` is zero.
    pub fn new(dimensions: usize) -> Self {
        Self::with_capacity(dimensions, 0)
    }

    /// Creates an empty tree with room for `capacity` points.
    ///
    /// # Panics
    ///
    /// Panics if `dimensions` is zero.
    pub fn with_capacity(dimensions: usize, capacity: usize) -> Self {
        assert!(dimensions > 0, "a KD-tree needs at least one dimension");
        KdTree {
            nodes: Vec::with_capacity(capacity),
            coords: Vec::with_capacity(capacity * dimensions),
            dimensions,
            height: 0,
        }
    }

    /// Builds a tree by inserting `points` in iteration order.
    ///
    /// Stops at the first point with the wrong number of coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `dimensions` is zero.
    pub fn from_points<I, P>(dimensions: usize, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[T]>,
    {
        let points = points.into_iter();
        let mut tree = Self::with_capacity(dimensions, points.size_hint().0);
        for point in points {
            tree.insert(point.as_ref())?;
        }
        Ok(tree)
    }

    /// Returns the dimensionality K of the tree.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the number of points in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of levels in the tree (0 when empty).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterates over the stored points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.coords.chunks_exact(self.dimensions)
    }

    /// Inserts a point, descending by the partition rule to a free child slot.
    ///
    /// Equal points are not merged: inserting a point twice stores it twice.
    pub fn insert(&mut self, point: &[T]) -> Result<()> {
        self.check_dimensions(point)?;

        let index = self.nodes.len();
        let mut depth = 0;

        if let Some(mut current) = self.root() {
            loop {
                let axis = self.nodes[current].axis;
                let below = point[axis] < self.point(current)[axis];
                depth += 1;

                let node = &mut self.nodes[current];
                let slot = if below {
                    &mut node.left
                } else {
                    &mut node.right
                };
                match *slot {
                    Some(child) => current = child,
                    None => {
                        *slot = Some(index);
                        break;
                    }
                }
            }
        }

        self.coords.extend_from_slice(point);
        self.nodes.push(KdNode {
            axis: depth % self.dimensions,
            left: None,
            right: None,
        });

        if depth + 1 > self.height {
            self.height = depth + 1;
            if self.height % DEEP_TREE_STRIDE == 0 {
                debug!(
                    height = self.height,
                    len = self.nodes.len(),
                    "tree height keeps growing, insertion order may be degenerate"
                );
            }
        }

        trace!(index, depth, "inserted point");
        Ok(())
    }

    /// Returns true if some stored point equals `point` on every axis.
    pub fn search(&self, point: &[T]) -> Result<bool> {
        self.check_dimensions(point)?;

        let mut cursor = self.root();
        let mut visited = 0usize;

        while let Some(index) = cursor {
            visited += 1;
            let stored = self.point(index);
            if stored == point {
                trace!(visited, "search hit");
                return Ok(true);
            }

            let node = &self.nodes[index];
            cursor = if point[node.axis] < stored[node.axis] {
                node.left
            } else {
                node.right
            };
        }

        trace!(visited, "search miss");
        Ok(false)
    }

    /// Rejects points whose length differs from the tree's dimensionality.
    pub(super) fn check_dimensions(&self, point: &[T]) -> Result<()> {
        if point.len() == self.dimensions {
            Ok(())
        } else {
            debug!(
                expected = self.dimensions,
                found = point.len(),
                "rejected point with wrong dimensionality"
            );
            Err(KdError::DimensionMismatch {
                expected: self.dimensions,
                found: point.len(),
            })
        }
    }

    /// Index of the root node; the first inserted point always sits there.
    #[inline]
    pub(super) fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    #[inline]
    pub(super) fn node(&self, index: usize) -> &KdNode {
        &self.nodes[index]
    }

    /// Coordinates of the point stored at node `index`.
    #[inline]
    pub(super) fn point(&self, index: usize) -> &[T] {
        let start = index * self.dimensions;
        &self.coords[start..start + self.dimensions]
    }
}
