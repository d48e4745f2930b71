//! Decodes the reference points and prints the constant term of the
//! interpolating polynomial.
//!
//! Pivot steps are traced to stderr; stdout carries only the result line.
//!
//! Run with: `cargo run -p polyfit-solvers --example constant_term`

use std::error::Error;

use polyfit_core::{EncodedValue, decode_points};
use polyfit_solvers::{
    interpolation::{FitConfig, constant_report, fit},
    linear::gauss_jordan::{self, Action, Event},
};

/// Number of points required to pin down the polynomial.
const K: usize = 3;

fn main() -> Result<(), Box<dyn Error>> {
    let points = decode_points([
        (1, EncodedValue::new(10, "4")),
        (2, EncodedValue::new(2, "111")),
        (3, EncodedValue::new(10, "12")),
    ])?;

    let config = FitConfig::from_required_points(points, K)?;

    let trace = |event: &Event<'_>| -> Option<Action> {
        eprintln!(
            "step {}: pivot {} from row {}, rhs {:?}",
            event.step, event.pivot, event.pivot_row, event.rhs
        );
        None
    };

    let poly = fit(&config, &gauss_jordan::Config::default(), trace)?;

    println!("{}", constant_report(&poly));
    Ok(())
}
