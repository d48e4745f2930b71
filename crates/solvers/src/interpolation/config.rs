use polyfit_core::DataPoint;

use super::FitError;

/// Points to interpolate and the degree of the polynomial to fit.
///
/// Only the first `degree + 1` points take part in the fit; any extra points
/// are carried along but ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FitConfig {
    pub points: Vec<DataPoint>,
    pub degree: usize,
}

impl FitConfig {
    /// Creates a config that fits a polynomial of the given degree.
    #[must_use]
    pub fn new(points: Vec<DataPoint>, degree: usize) -> Self {
        Self { points, degree }
    }

    /// Creates a config from the number of points `k` the fit must use.
    ///
    /// The fitted polynomial has degree `k - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::ZeroRequiredPoints`] if `k` is zero.
    pub fn from_required_points(points: Vec<DataPoint>, k: usize) -> Result<Self, FitError> {
        let degree = k.checked_sub(1).ok_or(FitError::ZeroRequiredPoints)?;
        Ok(Self { points, degree })
    }

    /// Returns the number of points the fit uses.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::DegreeTooLarge`] if `degree + 1` does not fit in
    /// a `usize`.
    pub fn required_points(&self) -> Result<usize, FitError> {
        self.degree
            .checked_add(1)
            .ok_or(FitError::DegreeTooLarge {
                degree: self.degree,
            })
    }

    /// Returns the points the fit uses.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::DegreeTooLarge`] if the point count overflows, or
    /// [`FitError::NotEnoughPoints`] if fewer than
    /// [`required_points`](Self::required_points) are available.
    pub fn active_points(&self) -> Result<&[DataPoint], FitError> {
        let required = self.required_points()?;
        self.points
            .get(..required)
            .ok_or(FitError::NotEnoughPoints {
                degree: self.degree,
                required,
                available: self.points.len(),
            })
    }
}
