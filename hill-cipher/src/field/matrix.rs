//! A dense, row-major matrix with value semantics.

use crate::errors::HillCipherError;

use itertools::Itertools;
use num_traits::Zero;

use std::fmt;
use std::ops::{Index, IndexMut};

/// An `R×C` grid of elements, stored row-major.
///
/// The shape is fixed at construction and both dimensions are at least 1.
/// Cloning copies the backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> Matrix<T> {
    /// Creates a `rows×cols` matrix filled with zero.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidShape` if either dimension is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::field::{Matrix, Z97};
    /// let m: Matrix<Z97> = Matrix::try_with(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], Z97::new(0));
    /// assert!(Matrix::<Z97>::try_with(0, 3).is_err());
    /// ```
    pub fn try_with(rows: usize, cols: usize) -> Result<Self, HillCipherError> {
        if rows == 0 || cols == 0 {
            return Err(HillCipherError::InvalidShape(format!(
                "Matrix dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }

        Ok(Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }
}

impl<T: Copy> Matrix<T> {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidShape` if there are no rows or the rows are empty,
    /// and `HillCipherError::ShapeMismatch` if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, HillCipherError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 {
            return Err(HillCipherError::InvalidShape(format!(
                "Matrix dimensions must be positive, got {}x{}",
                row_count, cols
            )));
        }

        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(HillCipherError::ShapeMismatch(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }

        Ok(Matrix {
            rows: row_count,
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Reads element `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::IndexOutOfBounds` for an index outside the shape.
    pub fn get(&self, row: usize, col: usize) -> Result<T, HillCipherError> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Writes element `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::IndexOutOfBounds` for an index outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), HillCipherError> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns row `i` as a slice. Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(
            i < self.rows,
            "row {} out of bounds for {} rows",
            i,
            self.rows
        );
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Swaps rows `a` and `b` in place. Panics if either is out of range.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.rows && b < self.rows,
            "cannot swap rows {} and {} of a {}-row matrix",
            a,
            b,
            self.rows
        );
        if a == b {
            return;
        }

        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Applies `mapper` to every element, producing a matrix of the same shape.
    pub fn map<U, F: Fn(T) -> U>(&self, mapper: F) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| mapper(x)).collect(),
        }
    }

    /// Iterates over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data
            .chunks(self.cols)
            .map(|row| row.to_vec())
            .collect()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, HillCipherError> {
        if row >= self.rows || col >= self.cols {
            return Err(HillCipherError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(row * self.cols + col)
    }
}

impl<T: Copy> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Copy> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .data
            .chunks(self.cols)
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        write!(f, "{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Z97;

    fn sample() -> Matrix<Z97> {
        Matrix::from_rows(vec![
            vec![Z97::new(1), Z97::new(2), Z97::new(3)],
            vec![Z97::new(4), Z97::new(5), Z97::new(6)],
        ])
        .unwrap()
    }

    #[test]
    fn test_zero_initialised() -> Result<(), HillCipherError> {
        let m: Matrix<Z97> = Matrix::try_with(3, 2)?;
        assert_eq!(m.shape(), (3, 2));
        assert!(m.to_rows().iter().flatten().all(|x| x.is_zero()));
        Ok(())
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            Matrix::<Z97>::try_with(2, 0),
            Err(HillCipherError::InvalidShape(_))
        ));
        assert!(matches!(
            Matrix::<Z97>::from_rows(Vec::new()),
            Err(HillCipherError::InvalidShape(_))
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![Z97::new(1), Z97::new(2)], vec![Z97::new(3)]]),
            Err(HillCipherError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_get_and_set() -> Result<(), HillCipherError> {
        let mut m = sample();
        assert_eq!(m.get(1, 2)?, Z97::new(6));
        m.set(1, 2, Z97::new(100))?;
        assert_eq!(m[(1, 2)], Z97::new(3));

        m[(0, 0)] = Z97::new(-1);
        assert_eq!(m.get(0, 0)?, Z97::new(96));
        Ok(())
    }

    #[test]
    fn test_out_of_bounds_access_is_reported() {
        let mut m = sample();
        assert!(matches!(
            m.get(2, 0),
            Err(HillCipherError::IndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        ));
        assert!(m.set(0, 3, Z97::new(1)).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let m = sample();
        let _ = m[(0, 3)];
    }

    #[test]
    fn test_swap_rows() {
        let mut m = sample();
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[Z97::new(4), Z97::new(5), Z97::new(6)]);
        assert_eq!(m.row(1), &[Z97::new(1), Z97::new(2), Z97::new(3)]);

        m.swap_rows(1, 1);
        assert_eq!(m.row(1), &[Z97::new(1), Z97::new(2), Z97::new(3)]);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        copy[(0, 0)] = Z97::new(42);
        assert_eq!(original[(0, 0)], Z97::new(1));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_equality_compares_shape() -> Result<(), HillCipherError> {
        let wide: Matrix<Z97> = Matrix::try_with(1, 4)?;
        let tall: Matrix<Z97> = Matrix::try_with(4, 1)?;
        assert_ne!(wide, tall);
        Ok(())
    }

    #[test]
    fn test_map_and_display() {
        let m = sample().map(|x| i64::from(x) * 10);
        assert_eq!(m.to_rows(), vec![vec![10, 20, 30], vec![40, 50, 60]]);
        assert_eq!(sample().to_string(), "[1, 2, 3]\n[4, 5, 6]");
    }
}
