//! Solvers for dense square linear systems `A·x = b`.
//!
//! # Solvers
//!
//! - [`gauss_jordan`] — row reduction to the identity, with optional partial
//!   pivoting

mod matrix;

pub use matrix::{Matrix, ShapeError};

pub mod gauss_jordan;
