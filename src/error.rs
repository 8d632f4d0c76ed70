//! Error types for kdindex operations.

use thiserror::Error;

/// Errors that can occur when inserting into or querying a [`KdTree`](crate::KdTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdError {
    /// A point or bound has a different number of coordinates than the tree.
    #[error("dimension mismatch: tree has {expected} dimensions, got {found}")]
    DimensionMismatch {
        /// Dimensionality the tree was constructed with.
        expected: usize,
        /// Number of coordinates the caller supplied.
        found: usize,
    },

    /// A nearest-neighbor query was made against a tree with no points.
    #[error("tree is empty")]
    EmptyTree,
}

/// Result alias used by every fallible tree operation.
pub type Result<T> = std::result::Result<T, KdError>;
