//! Analysis error types

use millikan_core::PhysicsError;
use thiserror_no_std::Error;

/// Result type for run analysis
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors from statistics over a series of runs
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// No samples to work with
    #[error("No samples to analyse")]
    EmptyInput,

    /// Paired slices differ in length
    #[error("Length mismatch: {x} x values, {y} y values")]
    LengthMismatch {
        /// Length of the abscissa (or weight) slice
        x: usize,
        /// Length of the ordinate slice
        y: usize,
    },

    /// All x values coincide (or weights sum to zero), so no line fits
    #[error("Degenerate fit: x values do not vary")]
    DegenerateFit,

    /// A run failed a physics check
    #[error("{0}")]
    Physics(PhysicsError),
}

impl From<PhysicsError> for AnalysisError {
    fn from(err: PhysicsError) -> Self {
        AnalysisError::Physics(err)
    }
}
