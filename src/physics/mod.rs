//! gnssro::physics - radiometry helpers
//!
//! Public submodules:
//! - planck (Planck<T>, blackbody spectral radiance)

pub mod planck;

pub use planck::{Planck, BOLTZMANN_CONSTANT, PLANCK_CONSTANT, SPEED_OF_LIGHT};
