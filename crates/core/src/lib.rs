//! Core types and traits for polyfit.
//!
//! This crate holds the pieces shared by the solvers:
//!
//! - [`radix`] — decodes digit strings written in bases 2 through 36
//! - [`DataPoint`] — a decoded `(x, y)` interpolation point
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod point;

pub mod radix;

pub use observer::Observer;
pub use point::{DataPoint, PointError, decode_points};
pub use radix::{DecodeError, EncodedValue};
