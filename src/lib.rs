//! kdindex - A KD-tree spatial index
//!
//! Stores points of K numeric coordinates in a tree shaped purely by insertion
//! order, and answers exact membership, nearest-neighbor, and axis-aligned
//! range queries against it. Every traversal runs on an explicit stack, so
//! even a fully degenerate tree (sorted input) is safe to query.

pub mod bounds;
pub mod coordinate;
pub mod error;
pub mod spatial;

pub use bounds::Aabb;
pub use coordinate::Coordinate;
pub use error::{KdError, Result};
pub use spatial::KdTree;
