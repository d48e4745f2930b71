//! Polynomial interpolation through decoded data points.
//!
//! A polynomial of degree `d` is fitted through `d + 1` points by solving the
//! Vandermonde system
//!
//! ```text
//! [ x₀ᵈ … x₀ 1 ] [ c_d ]   [ y₀ ]
//! [  ⋮      ⋮  ] [  ⋮  ] = [  ⋮ ]
//! [ x_dᵈ … x_d 1 ] [ c₀ ]   [ y_d ]
//! ```
//!
//! with [`gauss_jordan`]. The last unknown is the polynomial's constant term.
//!
//! # Example
//!
//! ```
//! use polyfit_core::DataPoint;
//! use polyfit_solvers::{interpolation::{FitConfig, fit_unobserved}, linear::gauss_jordan};
//!
//! let points = vec![DataPoint::new(1, 4), DataPoint::new(2, 7), DataPoint::new(3, 12)];
//! let poly = fit_unobserved(&FitConfig::new(points, 2), &gauss_jordan::Config::default())?;
//!
//! assert!((poly.constant() - 3.0).abs() < 1e-12);
//! # Ok::<(), polyfit_solvers::interpolation::FitError>(())
//! ```

mod config;
mod error;
mod polynomial;

pub use config::FitConfig;
pub use error::FitError;
pub use polynomial::Polynomial;

use polyfit_core::{DataPoint, Observer};

use crate::linear::{
    Matrix,
    gauss_jordan::{self, Action, Event, Status},
};

/// Builds the square Vandermonde system for the given points.
///
/// Row `i` is `[xᵢᵈ, …, xᵢ, 1]` with `d = points.len() - 1`, and the
/// right-hand side holds the `y` values. Large coordinates lose precision in
/// the conversion to `f64`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vandermonde(points: &[DataPoint]) -> (Matrix, Vec<f64>) {
    let order = points.len();
    let mut matrix = Matrix::zeros(order);

    for (row, point) in points.iter().enumerate() {
        let x = point.x as f64;
        let mut power = 1.0;
        for col in (0..order).rev() {
            matrix[(row, col)] = power;
            power *= x;
        }
    }

    let rhs = points.iter().map(|point| point.y as f64).collect();
    (matrix, rhs)
}

/// Fits a polynomial through the configured points.
///
/// The observer receives the solver's [`Event`]s for each pivot step.
///
/// # Errors
///
/// Returns an error if the degree is too large, there are not enough points,
/// the linear solve fails (for example, two points share an `x`), or the
/// observer stops the solver early.
pub fn fit<Obs>(
    config: &FitConfig,
    solver: &gauss_jordan::Config,
    observer: Obs,
) -> Result<Polynomial, FitError>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let points = config.active_points()?;
    let (mut matrix, mut rhs) = vandermonde(points);

    let solution = gauss_jordan::solve_in_place(&mut matrix, &mut rhs, solver, observer)?;

    match solution.status {
        Status::Solved => Ok(Polynomial::new(solution.x)),
        Status::StoppedByObserver => Err(FitError::Incomplete),
    }
}

/// Fits a polynomial without observer support.
///
/// # Errors
///
/// Returns an error if there are not enough points or the linear solve fails.
pub fn fit_unobserved(
    config: &FitConfig,
    solver: &gauss_jordan::Config,
) -> Result<Polynomial, FitError> {
    fit(config, solver, ())
}

/// Formats the line reporting a polynomial's constant term.
#[must_use]
pub fn constant_report(poly: &Polynomial) -> String {
    format!("Constant C = {}", poly.constant())
}
