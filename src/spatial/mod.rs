//! Spatial index over K-dimensional points.
//!
//! [`KdTree`] is split by concern:
//!
//! - `kdtree` - construction, insertion, exact search
//! - `nearest` - nearest and k-nearest neighbor queries
//! - `range` - axis-aligned box and radius queries

mod kdtree;
mod nearest;
mod range;

pub use kdtree::KdTree;
