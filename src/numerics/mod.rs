// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod point;
    pub mod traits;
    pub mod vector;
}

pub use error::{NumericsError, Result};
pub use types::point::{Point, Point2, Point3};
pub use types::traits::{FloatingPoint, Scalar};
pub use types::vector::FixedVector;

/// Inner product of two vectors of equal dimension.
#[inline]
pub fn dot<T: Scalar, const DIM: usize>(a: &FixedVector<T, DIM>, b: &FixedVector<T, DIM>) -> T {
    a.dot(b)
}

/// Squared Euclidean length, `dot(v, v)`.
#[inline]
pub fn norm_squared<T: Scalar, const DIM: usize>(v: &FixedVector<T, DIM>) -> T {
    v.norm_squared()
}

#[inline]
pub fn magnitude<T: FloatingPoint, const DIM: usize>(v: &FixedVector<T, DIM>) -> T {
    v.magnitude()
}
