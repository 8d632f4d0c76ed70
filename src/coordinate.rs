//! Scalar coordinate types and distance helpers.
//!
//! Tree traversal only ever compares squared distances, so any primitive
//! numeric type works as a coordinate, including integers. Each coordinate
//! type names the scalar its squared distances are measured in: integers
//! widen to `u128` and saturate, floats stay in their own type. The true
//! Euclidean distance needs a square root and is only offered for floats.

use num_traits::{Float, Num, Zero};
use std::fmt::Debug;

/// A scalar usable as a point coordinate.
///
/// Implemented for every primitive integer and floating-point type.
pub trait Coordinate: Num + Copy + PartialOrd + Debug {
    /// Scalar that squared distances between coordinates are expressed in.
    type Distance: Num + Copy + PartialOrd + Debug;

    /// Squared gap `(a - b)^2` along a single axis.
    fn squared_gap(a: Self, b: Self) -> Self::Distance;

    /// Adds one axis term to a running squared distance.
    fn accumulate(sum: Self::Distance, term: Self::Distance) -> Self::Distance;
}

// Integer gaps are taken with `abs_diff`, which is exact across the whole
// signed range, then squared in u128. Only sums beyond u128::MAX saturate.
macro_rules! integer_coordinate {
    ($($t:ty),* $(,)?) => {$(
        impl Coordinate for $t {
            type Distance = u128;

            #[inline]
            fn squared_gap(a: Self, b: Self) -> u128 {
                let gap = a.abs_diff(b) as u128;
                gap.saturating_mul(gap)
            }

            #[inline]
            fn accumulate(sum: u128, term: u128) -> u128 {
                sum.saturating_add(term)
            }
        }
    )*};
}

macro_rules! float_coordinate {
    ($($t:ty),* $(,)?) => {$(
        impl Coordinate for $t {
            type Distance = $t;

            #[inline]
            fn squared_gap(a: Self, b: Self) -> $t {
                let gap = a - b;
                gap * gap
            }

            #[inline]
            fn accumulate(sum: $t, term: $t) -> $t {
                sum + term
            }
        }
    )*};
}

integer_coordinate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_coordinate!(f32, f64);

/// Squared Euclidean distance between two points of equal length.
///
/// Never overflows: integer coordinates accumulate in saturating `u128`.
#[inline]
pub fn squared_distance<T: Coordinate>(a: &[T], b: &[T]) -> T::Distance {
    debug_assert_eq!(a.len(), b.len(), "points differ in dimensionality");
    a.iter().zip(b).fold(<T::Distance as Zero>::zero(), |sum, (&x, &y)| {
        T::accumulate(sum, T::squared_gap(x, y))
    })
}

/// Euclidean distance between two points of equal length.
#[inline]
pub fn distance<F>(a: &[F], b: &[F]) -> F
where
    F: Coordinate<Distance = F> + Float,
{
    squared_distance(a, b).sqrt()
}
