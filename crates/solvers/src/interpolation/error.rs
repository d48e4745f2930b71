use thiserror::Error;

use crate::linear::gauss_jordan;

/// Errors that can occur while fitting a polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    #[error("fit requires at least one point")]
    ZeroRequiredPoints,

    #[error("degree {degree} is too large to count its points")]
    DegreeTooLarge { degree: usize },

    #[error("degree {degree} fit needs {required} points, got {available}")]
    NotEnoughPoints {
        degree: usize,
        required: usize,
        available: usize,
    },

    #[error("solver stopped before reducing the system")]
    Incomplete,

    #[error("linear solve failed: {0}")]
    Solve(#[from] gauss_jordan::Error),
}
