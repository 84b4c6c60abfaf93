//! Prelude for gnssro
//!
//! Re-exports the vector types, element traits and the Planck function for convenient use.

pub use crate::numerics::{dot, magnitude, norm_squared};
pub use crate::numerics::{FixedVector, NumericsError, Point, Point2, Point3};
pub use crate::numerics::{FloatingPoint, Scalar};
pub use crate::physics::Planck;

// Common type aliases for frequently used instantiations
pub type Vector2F32 = FixedVector<f32, 2>;
pub type Vector3F32 = FixedVector<f32, 3>;
pub type Vector2F64 = FixedVector<f64, 2>;
pub type Vector3F64 = FixedVector<f64, 3>;
