//! Gauss–Jordan elimination for dense square systems.
//!
//! # Algorithm
//!
//! For each pivot step `i` in `0..k`:
//!
//! 1. With [`Pivoting::Partial`], swap row `i` with the remaining row whose
//!    entry in column `i` has the largest magnitude.
//! 2. Normalize: divide row `i` of `A` and `b[i]` by the pivot `A[i][i]`.
//! 3. Eliminate: for every other row `r`, subtract `A[r][i]` times row `i`
//!    from row `r` (and the same multiple of `b[i]` from `b[r]`).
//!
//! After `k` steps `A` is the identity and `b` holds the solution. Every row
//! operation preserves the solution set, so the reduced system is always
//! equivalent to the original one.
//!
//! # Limitations
//!
//! - **No pivoting by default**: [`Pivoting::Disabled`] takes pivots straight
//!   from the diagonal, which is fragile when a pivot is small.
//! - **Singular systems are rejected**, not approximated: a pivot whose
//!   magnitude is at or below [`Config::pivot_tol`] fails with
//!   [`Error::SingularPivot`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per pivot step, after the pivot column has
//! been eliminated. Observers can return [`Action::StopEarly`] to halt with
//! the partially reduced right-hand side.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_PIVOT_TOL, Pivoting};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use polyfit_core::Observer;

use crate::linear::{Matrix, ShapeError};

/// Solves `matrix · x = rhs` without modifying the inputs.
///
/// See the [module docs](self) for the algorithm and observer events.
///
/// # Errors
///
/// Returns an error if the system is malformed, holds non-finite values, hits
/// a singular pivot, or produces a non-finite solution.
pub fn solve<Obs>(
    matrix: &Matrix,
    rhs: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut matrix = matrix.clone();
    let mut rhs = rhs.to_vec();

    let (status, steps) = eliminate(&mut matrix, &mut rhs, config, observer)?;

    Ok(Solution {
        status,
        x: rhs,
        steps,
    })
}

/// Solves `matrix · x = rhs` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved(matrix: &Matrix, rhs: &[f64], config: &Config) -> Result<Solution, Error> {
    solve(matrix, rhs, config, ())
}

/// Solves `matrix · x = rhs`, reducing both inputs in place.
///
/// On success `matrix` is the identity (up to rounding) and `rhs` holds the
/// same values as the returned solution. If an error is returned, the inputs
/// are left partially reduced.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_in_place<Obs>(
    matrix: &mut Matrix,
    rhs: &mut [f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let (status, steps) = eliminate(matrix, rhs, config, observer)?;

    Ok(Solution {
        status,
        x: rhs.to_vec(),
        steps,
    })
}

/// Solves `matrix · x = rhs` in place without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_in_place_unobserved(
    matrix: &mut Matrix,
    rhs: &mut [f64],
    config: &Config,
) -> Result<Solution, Error> {
    solve_in_place(matrix, rhs, config, ())
}

/// Runs the pivot steps and returns the final status and step count.
fn eliminate<Obs>(
    matrix: &mut Matrix,
    rhs: &mut [f64],
    config: &Config,
    mut observer: Obs,
) -> Result<(Status, usize), Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    validate_system(matrix, rhs)?;

    let order = matrix.order();

    for step in 0..order {
        let pivot_row = match config.pivoting() {
            Pivoting::Disabled => step,
            Pivoting::Partial => select_pivot_row(matrix, step),
        };
        if pivot_row != step {
            matrix.swap_rows(step, pivot_row);
            rhs.swap(step, pivot_row);
        }

        let pivot = matrix[(step, step)];
        if pivot.is_nan() || pivot.abs() <= config.pivot_tol() {
            return Err(Error::SingularPivot { step, pivot });
        }

        matrix.divide_row(step, pivot);
        rhs[step] /= pivot;

        for row in (0..order).filter(|&row| row != step) {
            let factor = matrix[(row, step)];
            matrix.subtract_scaled_row(row, step, factor);
            rhs[row] -= factor * rhs[step];
        }

        let event = Event {
            step,
            pivot_row,
            pivot,
            matrix: &*matrix,
            rhs: &*rhs,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok((Status::StoppedByObserver, step + 1));
        }
    }

    if let Some((index, &value)) = rhs.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteSolution { index, value });
    }

    Ok((Status::Solved, order))
}

/// Checks that `rhs` matches the matrix order and that all values are finite.
fn validate_system(matrix: &Matrix, rhs: &[f64]) -> Result<(), Error> {
    if rhs.len() != matrix.order() {
        return Err(ShapeError::LengthMismatch {
            expected: matrix.order(),
            actual: rhs.len(),
        }
        .into());
    }

    for (row, values) in matrix.rows().enumerate() {
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteCoefficient { row, col });
        }
    }

    if let Some(row) = rhs.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteRhs { row });
    }

    Ok(())
}

/// Returns the row at or below `step` with the largest magnitude in column `step`.
///
/// Ties keep the earliest row.
fn select_pivot_row(matrix: &Matrix, step: usize) -> usize {
    (step + 1..matrix.order()).fold(step, |best, row| {
        if matrix[(row, step)].abs() > matrix[(best, step)].abs() {
            row
        } else {
            best
        }
    })
}
