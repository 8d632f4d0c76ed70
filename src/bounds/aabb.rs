//! Axis-aligned bounding box over K-dimensional points.

use crate::coordinate::Coordinate;

/// An axis-aligned box, inclusive on both bounds of every axis.
///
/// Borrows its corners, so building one for a query costs nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<'a, T> {
    /// Lower corner (smallest value on each axis).
    pub min: &'a [T],
    /// Upper corner (largest value on each axis).
    pub max: &'a [T],
}

impl<'a, T: Coordinate> Aabb<'a, T> {
    /// Creates a box from its lower and upper corners.
    ///
    /// Does not validate that `min <= max`; an inverted axis simply contains
    /// no points.
    #[inline]
    pub fn new(min: &'a [T], max: &'a [T]) -> Self {
        Self { min, max }
    }

    /// Returns true if `min[i] <= point[i] <= max[i]` on every axis.
    ///
    /// `point` and both corners must have the same length; debug builds
    /// assert it, release builds only inspect the shortest common prefix.
    #[inline]
    pub fn contains(&self, point: &[T]) -> bool {
        debug_assert!(
            point.len() == self.min.len() && point.len() == self.max.len(),
            "point and box differ in dimensionality"
        );
        point
            .iter()
            .zip(self.min.iter().zip(self.max))
            .all(|(p, (lo, hi))| lo <= p && p <= hi)
    }

    /// Returns true if some axis has `min > max`, so no point can be inside.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.min.iter().zip(self.max).any(|(lo, hi)| lo > hi)
    }
}
