//! Numerical solvers for polyfit.
//!
//! - [`linear`] — dense square matrices and Gauss–Jordan elimination
//! - [`interpolation`] — fitting a polynomial through decoded data points

pub mod interpolation;
pub mod linear;
