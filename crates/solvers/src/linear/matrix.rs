use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Errors raised when a matrix or vector has the wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("vector has length {actual}, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A dense square matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    order: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an `order`×`order` matrix of zeros.
    #[must_use]
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            data: vec![0.0; order * order],
        }
    }

    /// Creates the `order`×`order` identity matrix.
    #[must_use]
    pub fn identity(order: usize) -> Self {
        let mut matrix = Self::zeros(order);
        for i in 0..order {
            matrix[(i, i)] = 1.0;
        }
        matrix
    }

    /// Creates a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotSquare`] if any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let order = rows.len();
        let mut data = Vec::with_capacity(order * order);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != order {
                return Err(ShapeError::NotSquare {
                    row,
                    len: values.len(),
                    expected: order,
                });
            }
            data.extend(values);
        }

        Ok(Self { order, data })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the entries of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.order;
        &self.data[start..start + self.order]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // A zero chunk size would panic; an empty matrix has no rows anyway.
        self.data.chunks_exact(self.order.max(1))
    }

    /// Multiplies the matrix by a column vector.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] if `x` does not have one entry
    /// per column.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>, ShapeError> {
        if x.len() != self.order {
            return Err(ShapeError::LengthMismatch {
                expected: self.order,
                actual: x.len(),
            });
        }

        Ok(self
            .rows()
            .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Swaps two rows.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.order {
            self.data.swap(a * self.order + col, b * self.order + col);
        }
    }

    /// Divides every entry of `row` by `divisor`.
    pub(crate) fn divide_row(&mut self, row: usize, divisor: f64) {
        let start = row * self.order;
        for value in &mut self.data[start..start + self.order] {
            *value /= divisor;
        }
    }

    /// Subtracts `factor` times row `source` from row `target`.
    pub(crate) fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        for col in 0..self.order {
            let value = self.data[source * self.order + col];
            self.data[target * self.order + col] -= factor * value;
        }
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix {
    fn from(rows: [[f64; N]; N]) -> Self {
        Self {
            order: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.order, "column {col} out of bounds");
        &self.data[row * self.order + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.order, "column {col} out of bounds");
        &mut self.data[row * self.order + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_square_matrix() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        assert_eq!(matrix.order(), 2);
        assert_eq!(matrix.row(1), &[3.0, 4.0]);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);

        assert_eq!(
            result,
            Err(ShapeError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_wide_matrix() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(result, Err(ShapeError::NotSquare { row: 0, .. })));
    }

    #[test]
    fn identity_times_vector_is_vector() {
        let x = [3.0, -1.0, 0.5];
        assert_eq!(Matrix::identity(3).mul_vec(&x).unwrap(), x.to_vec());
    }

    #[test]
    fn mul_vec_checks_length() {
        let matrix = Matrix::zeros(2);
        assert_eq!(
            matrix.mul_vec(&[1.0]),
            Err(ShapeError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let matrix = Matrix::from_rows(Vec::new()).unwrap();

        assert_eq!(matrix.order(), 0);
        assert_eq!(matrix.rows().count(), 0);
        assert_eq!(matrix.mul_vec(&[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn row_operations() {
        let mut matrix = Matrix::from([[2.0, 4.0], [1.0, 3.0]]);

        matrix.divide_row(0, 2.0);
        assert_eq!(matrix.row(0), &[1.0, 2.0]);

        matrix.subtract_scaled_row(1, 0, 1.0);
        assert_eq!(matrix.row(1), &[0.0, 1.0]);

        matrix.swap_rows(0, 1);
        assert_eq!(matrix, Matrix::from([[0.0, 1.0], [1.0, 2.0]]));
    }
}
