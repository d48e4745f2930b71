use thiserror::Error;

use crate::linear::ShapeError;

/// Errors that can occur during Gauss–Jordan elimination.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid system shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("non-finite coefficient at row {row}, column {col}")]
    NonFiniteCoefficient { row: usize, col: usize },

    #[error("non-finite right-hand side at row {row}")]
    NonFiniteRhs { row: usize },

    #[error("singular pivot {pivot} at step {step}")]
    SingularPivot { step: usize, pivot: f64 },

    #[error("non-finite solution value {value} at index {index}")]
    NonFiniteSolution { index: usize, value: f64 },
}
