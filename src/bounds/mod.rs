//! Bounding volumes used by range queries.

mod aabb;

pub use aabb::Aabb;
