//! Region queries: axis-aligned boxes and radius balls.

use super::kdtree::KdTree;
use crate::bounds::Aabb;
use crate::coordinate::{squared_distance, Coordinate};
use crate::error::Result;
use tracing::trace;

impl<T: Coordinate> KdTree<T> {
    /// Finds every stored point inside the closed box `[min, max]`.
    ///
    /// A point qualifies when `min[i] <= p[i] <= max[i]` on every axis.
    /// Results come back in traversal order, which callers must not rely on.
    pub fn range_search(&self, min: &[T], max: &[T]) -> Result<Vec<&[T]>> {
        self.check_dimensions(min)?;
        self.check_dimensions(max)?;

        let aabb = Aabb::new(min, max);
        if aabb.is_inverted() {
            trace!("range search on inverted box");
            return Ok(Vec::new());
        }
        Ok(self.within_aabb(aabb))
    }

    /// Finds every stored point inside `aabb`.
    ///
    /// The box's corners are assumed to have the tree's dimensionality.
    fn within_aabb(&self, aabb: Aabb<'_, T>) -> Vec<&[T]> {
        let mut results = Vec::new();
        let mut stack: Vec<usize> = self.root().into_iter().collect();
        let mut visited = 0usize;

        while let Some(index) = stack.pop() {
            visited += 1;
            let point = self.point(index);
            if aabb.contains(point) {
                results.push(point);
            }

            let node = self.node(index);
            let split = point[node.axis];

            // Right is pushed first so the left subtree is visited first.
            if let Some(child) = node.right {
                if split <= aabb.max[node.axis] {
                    stack.push(child);
                }
            }
            if let Some(child) = node.left {
                if aabb.min[node.axis] <= split {
                    stack.push(child);
                }
            }
        }

        trace!(visited, found = results.len(), "range search resolved");
        results
    }

    /// Finds every stored point within Euclidean distance `radius` of `query`.
    ///
    /// The boundary is inclusive. A negative (or NaN) radius matches nothing.
    pub fn within_radius(&self, query: &[T], radius: T) -> Result<Vec<&[T]>> {
        self.check_dimensions(query)?;

        if !(radius >= T::zero()) {
            trace!("radius search with negative radius");
            return Ok(Vec::new());
        }

        let radius_sq = T::squared_gap(radius, T::zero());
        let mut results = Vec::new();
        let mut stack: Vec<usize> = self.root().into_iter().collect();
        let mut visited = 0usize;

        while let Some(index) = stack.pop() {
            visited += 1;
            let point = self.point(index);
            if squared_distance(query, point) <= radius_sq {
                results.push(point);
            }

            let node = self.node(index);
            let (query_val, split_val) = (query[node.axis], point[node.axis]);
            let crosses = T::squared_gap(query_val, split_val) <= radius_sq;

            if let Some(child) = node.right {
                if query_val >= split_val || crosses {
                    stack.push(child);
                }
            }
            if let Some(child) = node.left {
                if query_val < split_val || crosses {
                    stack.push(child);
                }
            }
        }

        trace!(visited, found = results.len(), "radius search resolved");
        Ok(results)
    }
}
