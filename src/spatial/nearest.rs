//! Nearest-neighbor queries.
//!
//! Both queries are branch-and-bound depth-first searches: descend into the
//! child on the query's side of the splitting plane first, then visit the
//! other child only if the plane itself is closer than the current best.
//! Distances are compared squared, so integer coordinates order exactly.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::kdtree::KdTree;
use crate::coordinate::{squared_distance, Coordinate};
use crate::error::{KdError, Result};
use tracing::trace;

/// Pending work on the explicit traversal stack.
enum Visit<D> {
    /// Examine a node and schedule its children.
    Enter(usize),
    /// Revisit the far child of a node once its near side is exhausted.
    /// `gap` is the squared distance from the query to the splitting plane.
    Far { child: usize, gap: D },
}

impl<T: Coordinate> KdTree<T> {
    /// Finds the stored point closest to `query` by Euclidean distance.
    ///
    /// When several points are equally close, the first one reached by the
    /// search wins.
    pub fn nearest_neighbor(&self, query: &[T]) -> Result<&[T]> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// Finds the closest stored point along with its squared distance to `query`.
    ///
    /// Integer trees report the distance as `u128`, so coordinates anywhere
    /// in the type's range compare correctly.
    pub fn nearest_with_distance(&self, query: &[T]) -> Result<(&[T], T::Distance)> {
        self.check_dimensions(query)?;
        let root = self.root().ok_or(KdError::EmptyTree)?;

        let mut best = root;
        let mut best_dist = squared_distance(query, self.point(root));
        let mut stack = vec![Visit::Enter(root)];
        let mut visited = 0usize;

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(index) => {
                    visited += 1;
                    let point = self.point(index);
                    let dist = squared_distance(query, point);
                    if dist < best_dist {
                        best = index;
                        best_dist = dist;
                    }

                    let node = self.node(index);
                    let (query_val, split_val) = (query[node.axis], point[node.axis]);
                    let (near, far) = node.near_far(query_val < split_val);

                    // Far is pushed first so the whole near subtree is
                    // exhausted before the plane test runs.
                    if let Some(child) = far {
                        stack.push(Visit::Far {
                            child,
                            gap: T::squared_gap(query_val, split_val),
                        });
                    }
                    if let Some(child) = near {
                        stack.push(Visit::Enter(child));
                    }
                }
                Visit::Far { child, gap } => {
                    if gap < best_dist {
                        stack.push(Visit::Enter(child));
                    }
                }
            }
        }

        trace!(visited, best, "nearest neighbor resolved");
        Ok((self.point(best), best_dist))
    }

    /// Finds the `k` stored points closest to `query`.
    ///
    /// Returns `(point, squared distance)` pairs sorted closest first. Fewer
    /// than `k` pairs come back when the tree is smaller than `k`; `k = 0` or
    /// an empty tree yields an empty vector.
    pub fn k_nearest(&self, query: &[T], k: usize) -> Result<Vec<(&[T], T::Distance)>> {
        self.check_dimensions(query)?;
        let root = match self.root() {
            Some(root) if k > 0 => root,
            _ => return Ok(Vec::new()),
        };

        let mut heap: BinaryHeap<HeapEntry<T::Distance>> = BinaryHeap::with_capacity(k + 1);
        let mut stack = vec![Visit::Enter(root)];
        let mut visited = 0usize;

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(index) => {
                    visited += 1;
                    let point = self.point(index);
                    heap_insert(&mut heap, index, squared_distance(query, point), k);

                    let node = self.node(index);
                    let (query_val, split_val) = (query[node.axis], point[node.axis]);
                    let (near, far) = node.near_far(query_val < split_val);

                    if let Some(child) = far {
                        stack.push(Visit::Far {
                            child,
                            gap: T::squared_gap(query_val, split_val),
                        });
                    }
                    if let Some(child) = near {
                        stack.push(Visit::Enter(child));
                    }
                }
                Visit::Far { child, gap } => {
                    let should_search = heap.len() < k
                        || heap.peek().map(|worst| gap < worst.dist).unwrap_or(true);
                    if should_search {
                        stack.push(Visit::Enter(child));
                    }
                }
            }
        }

        let mut results: Vec<HeapEntry<T::Distance>> = heap.into_vec();
        results.sort();

        trace!(visited, found = results.len(), k, "k nearest resolved");
        Ok(results
            .into_iter()
            .map(|entry| (self.point(entry.index), entry.dist))
            .collect())
    }
}

/// Pushes onto the bounded max-heap, evicting the farthest entry once full.
fn heap_insert<D: PartialOrd>(
    heap: &mut BinaryHeap<HeapEntry<D>>,
    index: usize,
    dist: D,
    k: usize,
) {
    if heap.len() < k {
        heap.push(HeapEntry { index, dist });
    } else if let Some(worst) = heap.peek() {
        if dist < worst.dist {
            heap.pop();
            heap.push(HeapEntry { index, dist });
        }
    }
}

/// A candidate in the k-nearest max-heap, ordered by distance then by node
/// index so that ties resolve deterministically.
struct HeapEntry<D> {
    index: usize,
    dist: D,
}

impl<D: PartialOrd> PartialEq for HeapEntry<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<D: PartialOrd> Eq for HeapEntry<D> {}

impl<D: PartialOrd> PartialOrd for HeapEntry<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: PartialOrd> Ord for HeapEntry<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .partial_cmp(&other.dist)
            .unwrap_or(Ordering::Equal)
            .then(self.index.cmp(&other.index))
    }
}
