//! # gnssro
//!
//! Fixed-dimension point/vector arithmetic and a Planck blackbody radiance
//! function.
//!
//! ```rust
//! use gnssro::prelude::*;
//!
//! let mut p: Point2 = Point2::splat(444.0);
//! let copy = p;
//! p += copy;
//! assert_eq!(p.to_string(), "888 888");
//!
//! let radiance = Planck::<f64>::si().radiance(15000.0, 293.15);
//! assert!(radiance.is_finite());
//! ```

pub mod numerics;
pub mod physics;
pub mod prelude;

pub use numerics::{FixedVector, NumericsError};
pub use physics::Planck;
