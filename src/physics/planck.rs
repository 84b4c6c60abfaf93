// src/physics/planck.rs
// Blackbody spectral radiance.

use tracing::trace;

use crate::numerics::types::traits::FloatingPoint;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Planck constant, J·s.
pub const PLANCK_CONSTANT: f64 = 6.626070e-34;

/// Boltzmann constant, J/K.
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23;

/// Planck's law evaluator holding the two physical constants it needs.
///
/// The constants are fixed at construction; evaluation has no side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planck<T: FloatingPoint = f64> {
    h: T,
    kb: T,
}

impl<T: FloatingPoint> Planck<T> {
    /// Construct from a Planck constant `h` and a Boltzmann constant `kb`.
    pub fn new(h: T, kb: T) -> Self {
        trace!(h = ?h, kb = ?kb, "planck function constructed");
        Self { h, kb }
    }

    /// Construct with the SI values of both constants.
    pub fn si() -> Self {
        Self::new(
            T::from_f64(PLANCK_CONSTANT),
            T::from_f64(BOLTZMANN_CONSTANT),
        )
    }

    pub fn h(&self) -> T {
        self.h
    }

    pub fn kb(&self) -> T {
        self.kb
    }

    /// Spectral radiance at `frequency` (Hz) and `temperature` (K).
    ///
    /// Evaluates `2*h*freq / c^2 / (exp(h*freq/kB*T) - 1)` left to right in
    /// `f64` and converts only the result back to `T`. The numerator is far
    /// below the smallest normal `f32`. Inputs are not validated: a zero
    /// temperature or frequency yields whatever IEEE-754 gives (NaN or infinity).
    pub fn radiance(&self, frequency: T, temperature: T) -> T {
        let h = self.h.to_f64();
        let kb = self.kb.to_f64();
        let nu = frequency.to_f64();
        let t = temperature.to_f64();
        let exponent = h * nu / kb * t;

        T::from_f64(2.0 * h * nu / (SPEED_OF_LIGHT * SPEED_OF_LIGHT) / (exponent.exp() - 1.0))
    }
}

impl<T: FloatingPoint> Default for Planck<T> {
    fn default() -> Self {
        Self::si()
    }
}
