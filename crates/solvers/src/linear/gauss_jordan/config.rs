use thiserror::Error;

/// Default magnitude at or below which a pivot is treated as singular.
pub const DEFAULT_PIVOT_TOL: f64 = 1e-12;

/// Row selection strategy applied before each pivot step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Pivoting {
    /// Use the diagonal entry of each row as its pivot, in row order.
    #[default]
    Disabled,

    /// Swap in the remaining row with the largest entry in the pivot column.
    Partial,
}

/// Configuration for the Gauss–Jordan solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pivoting: Pivoting,
    pivot_tol: f64,
}

/// Errors that can occur when validating a Gauss–Jordan solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pivot_tol must be finite and non-negative")]
    PivotTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::Disabled,
            pivot_tol: DEFAULT_PIVOT_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated pivot tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `pivot_tol` is negative or non-finite.
    pub fn new(pivoting: Pivoting, pivot_tol: f64) -> Result<Self, ConfigError> {
        if !pivot_tol.is_finite() || pivot_tol < 0.0 {
            return Err(ConfigError::PivotTol);
        }

        Ok(Self {
            pivoting,
            pivot_tol,
        })
    }

    /// Returns a copy of this config using the given pivoting strategy.
    #[must_use]
    pub fn with_pivoting(self, pivoting: Pivoting) -> Self {
        Self { pivoting, ..self }
    }

    /// Returns the pivoting strategy.
    #[must_use]
    pub fn pivoting(&self) -> Pivoting {
        self.pivoting
    }

    /// Returns the magnitude at or below which a pivot is rejected.
    #[must_use]
    pub fn pivot_tol(&self) -> f64 {
        self.pivot_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unpivoted() {
        let config = Config::default();
        assert_eq!(config.pivoting(), Pivoting::Disabled);
        assert!((config.pivot_tol() - DEFAULT_PIVOT_TOL).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(
            Config::new(Pivoting::Partial, -1e-9),
            Err(ConfigError::PivotTol)
        );
        assert_eq!(
            Config::new(Pivoting::Partial, f64::NAN),
            Err(ConfigError::PivotTol)
        );
        assert_eq!(
            Config::new(Pivoting::Disabled, f64::INFINITY),
            Err(ConfigError::PivotTol)
        );
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        let config = Config::new(Pivoting::Disabled, 0.0).unwrap();
        assert_eq!(config.with_pivoting(Pivoting::Partial).pivoting(), Pivoting::Partial);
    }
}
