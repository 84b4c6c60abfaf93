// src/numerics/types/point.rs
// Point is an alias for FixedVector.

use super::vector::FixedVector;

/// Point is an alias to FixedVector to represent points in space.
///
/// The alias keeps generic template parameterization.
pub type Point<T, const DIM: usize> = FixedVector<T, DIM>;
pub type Point2<T = f64> = FixedVector<T, 2>;
pub type Point3<T = f64> = FixedVector<T, 3>;
