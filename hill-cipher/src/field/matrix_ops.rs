use crate::errors::HillCipherError;
use crate::field::{Matrix, Z97};

use num_traits::{One, Zero};

use std::ops::{Add, Mul};

/// Computes the matrix product `C = AB`.
///
/// Each entry of `C` is the dot product of a row of `A` with a column of `B`,
/// accumulated with the element type's own arithmetic.
///
/// # Errors
///
/// Returns `HillCipherError::ShapeMismatch` if `A.cols() != B.rows()`.
///
/// # Example
///
/// ```
/// # use hill_cipher::field::{Matrix, Z97};
/// # use hill_cipher::field::matrix_ops::matrix_mul;
/// let a = Matrix::from_rows(vec![vec![Z97::new(1), Z97::new(2)]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![Z97::new(3)], vec![Z97::new(50)]]).unwrap();
/// // 1*3 + 2*50 = 103 = 6 mod 97
/// assert_eq!(matrix_mul(&a, &b).unwrap()[(0, 0)], Z97::new(6));
/// ```
pub fn matrix_mul<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, HillCipherError>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    if a.cols() != b.rows() {
        return Err(HillCipherError::ShapeMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({}x{} * {}x{})",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    let mut c = Matrix::try_with(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        let row = a.row(i);
        for j in 0..b.cols() {
            c[(i, j)] = row
                .iter()
                .enumerate()
                .fold(T::zero(), |sum, (k, &x)| sum + x * b[(k, j)]);
        }
    }

    Ok(c)
}

/// Creates the `n×n` identity matrix over Z_97.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidShape` if `n` is 0.
pub fn identity_matrix(n: usize) -> Result<Matrix<Z97>, HillCipherError> {
    let mut identity = Matrix::try_with(n, n)?;
    for i in 0..n {
        identity[(i, i)] = Z97::one();
    }
    Ok(identity)
}
