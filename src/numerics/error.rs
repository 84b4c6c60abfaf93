// src/numerics/error.rs
// Errors returned by the checked access paths of the numerics types.

/// Errors that can occur on the checked accessors of `FixedVector`.
///
/// The operator and `Index` paths never produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("Index out of bounds: {index} is not below dimension {dim}")]
    IndexOutOfBounds { index: usize, dim: usize },

    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result alias used by the checked accessors.
pub type Result<T> = core::result::Result<T, NumericsError>;
