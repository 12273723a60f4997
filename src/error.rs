//! Error types for cloth construction and stepping.

use thiserror::Error;

/// Errors reported when a cloth is built or stepped with invalid input.
///
/// A failed call never leaves the cloth partially updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    /// Rows and columns must both be at least 1.
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Rest distance must be positive and finite.
    #[error("rest distance must be positive and finite")]
    InvalidRestDistance,
    /// Damping must lie in [0, 1).
    #[error("damping must be finite and in [0, 1)")]
    InvalidDamping,
    /// Mass must be positive and finite.
    #[error("particle mass must be positive and finite")]
    InvalidMass,
    /// Relaxation needs at least one pass.
    #[error("relaxation passes must be at least 1")]
    InvalidRelaxationPasses,
    /// Step duration must be finite and non-negative.
    #[error("time step must be finite and non-negative")]
    InvalidTimeStep,
    /// Collider center must be finite and its radius finite and non-negative.
    #[error("collider must have a finite center and a finite, non-negative radius")]
    InvalidCollider,
    /// Gravity and anchor vectors must be finite.
    #[error("gravity and anchor must be finite vectors")]
    NonFiniteVector,
    /// Wind force must be finite.
    #[error("wind force must be a finite vector")]
    InvalidWind,
    /// Vertex indices of the surface would not fit in `u32`.
    #[error("{rows}x{cols} grid has too many vertices for 32-bit indices")]
    SurfaceTooLarge { rows: usize, cols: usize },
    /// A surface buffer was refreshed from a cloth of a different size.
    #[error("surface built for {expected_rows}x{expected_cols} grid, cloth is {rows}x{cols}")]
    SurfaceMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn dimension_message_names_the_grid() {
        let err = ClothError::InvalidDimensions { rows: 0, cols: 4 };
        assert_eq!(
            err.to_string(),
            "grid must have at least one row and one column (got 0x4)"
        );
    }
}
