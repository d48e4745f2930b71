/// A polynomial with coefficients ordered from the highest power down.
///
/// For `[a, b, c]` the polynomial is `a·x² + b·x + c`, so the last
/// coefficient is always the constant term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients, highest power first.
    ///
    /// An empty coefficient list is the zero polynomial.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree implied by the coefficient count.
    ///
    /// Leading zero coefficients are counted, so a quadratic fit through
    /// collinear points still reports degree 2.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.coefficients.last().copied().unwrap_or(0.0)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, coefficient| acc * x + coefficient)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn evaluates_with_horner() {
        // 2x³ - x + 5
        let poly = Polynomial::new(vec![2.0, 0.0, -1.0, 5.0]);

        assert_eq!(poly.degree(), 3);
        assert_relative_eq!(poly.constant(), 5.0);
        assert_relative_eq!(poly.evaluate(0.0), 5.0);
        assert_relative_eq!(poly.evaluate(2.0), 19.0);
        assert_relative_eq!(poly.evaluate(-1.5), -0.25);
    }

    #[test]
    fn zero_polynomial() {
        let poly = Polynomial::new(Vec::new());

        assert_eq!(poly.degree(), 0);
        assert_relative_eq!(poly.constant(), 0.0);
        assert_relative_eq!(poly.evaluate(42.0), 0.0);
    }
}
