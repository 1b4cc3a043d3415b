//! Matrix inversion over Z_97.
//!
//! 2×2 matrices use the adjugate formula. Everything else goes through
//! Gauss-Jordan elimination with partial pivoting on a private copy of the
//! input, carrying an augmenting identity matrix along.

use crate::errors::HillCipherError;
use crate::field::matrix_ops::identity_matrix;
use crate::field::{Matrix, Z97};

use num_traits::{One, Zero};

use tracing::{debug, trace};

/// Computes `M⁻¹` such that `M·M⁻¹ = M⁻¹·M = I` over Z_97.
///
/// The input is never modified.
///
/// # Errors
///
/// Returns `HillCipherError::ShapeMismatch` if the matrix is not square and
/// `HillCipherError::NotInvertible` if it is singular.
///
/// # Example
///
/// ```
/// # use hill_cipher::field::{Matrix, Z97};
/// # use hill_cipher::field::inverse::matrix_inverse;
/// # use hill_cipher::field::matrix_ops::{identity_matrix, matrix_mul};
/// let m = Matrix::from_rows(vec![
///     vec![Z97::new(2), Z97::new(4), Z97::new(5)],
///     vec![Z97::new(9), Z97::new(2), Z97::new(1)],
///     vec![Z97::new(3), Z97::new(17), Z97::new(7)],
/// ]).unwrap();
/// let inv = matrix_inverse(&m).unwrap();
/// assert_eq!(matrix_mul(&inv, &m).unwrap(), identity_matrix(3).unwrap());
/// ```
pub fn matrix_inverse(matrix: &Matrix<Z97>) -> Result<Matrix<Z97>, HillCipherError> {
    if !matrix.is_square() {
        return Err(HillCipherError::ShapeMismatch(format!(
            "matrix_inverse: matrix must be square, got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }

    if matrix.rows() == 2 {
        invert_2x2(matrix)
    } else {
        gauss_jordan(matrix)
    }
}

fn invert_2x2(m: &Matrix<Z97>) -> Result<Matrix<Z97>, HillCipherError> {
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);

    let det = a * d - b * c;
    if det.is_zero() {
        debug!("2x2 key has zero determinant");
        return Err(not_invertible("determinant is 0"));
    }

    let mut inv = Matrix::try_with(2, 2)?;
    inv[(0, 0)] = d.checked_div(det)?;
    inv[(0, 1)] = (-b).checked_div(det)?;
    inv[(1, 0)] = (-c).checked_div(det)?;
    inv[(1, 1)] = a.checked_div(det)?;

    Ok(inv)
}

fn gauss_jordan(m: &Matrix<Z97>) -> Result<Matrix<Z97>, HillCipherError> {
    let n = m.rows();
    let mut work = m.clone();
    let mut aug = identity_matrix(n)?;

    // Forward elimination to upper-triangular form.
    for i in 0..n {
        let pivot_row = select_pivot(&work, i);
        if pivot_row != i {
            trace!(column = i, from = pivot_row, "swapping pivot row");
            work.swap_rows(i, pivot_row);
            aug.swap_rows(i, pivot_row);
        }

        let pivot = work[(i, i)];
        if pivot.is_zero() {
            debug!(column = i, "no non-zero pivot available");
            return Err(not_invertible(&format!("column {} has no non-zero pivot", i)));
        }

        for k in (i + 1)..n {
            let factor = work[(k, i)].checked_div(pivot)?;
            if factor.is_zero() {
                continue;
            }
            for j in 0..n {
                let (w, a) = (work[(i, j)], aug[(i, j)]);
                work[(k, j)] -= factor * w;
                aug[(k, j)] -= factor * a;
            }
        }
    }

    // Back substitution: normalise each pivot row, then clear its column above.
    for i in (0..n).rev() {
        let pivot = work[(i, i)];
        if pivot.is_zero() {
            debug!(row = i, "pivot vanished during back substitution");
            return Err(not_invertible(&format!("row {} has a zero pivot", i)));
        }

        for j in 0..n {
            aug[(i, j)] = aug[(i, j)].checked_div(pivot)?;
        }
        work[(i, i)] = Z97::one();

        for row in 0..i {
            let factor = work[(row, i)];
            for col in 0..n {
                let a = aug[(i, col)];
                aug[(row, col)] -= a * factor;
            }
            work[(row, i)] = Z97::zero();
        }
    }

    Ok(aug)
}

/// Picks the row in `col..n` with the largest canonical value in column `col`.
/// Ties keep the lowest row index.
fn select_pivot(work: &Matrix<Z97>, col: usize) -> usize {
    (col + 1..work.rows()).fold(col, |best, k| {
        if work[(k, col)].value() > work[(best, col)].value() {
            k
        } else {
            best
        }
    })
}

fn not_invertible(reason: &str) -> HillCipherError {
    HillCipherError::NotInvertible(format!("The matrix is not invertible: {}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::matrix_ops::matrix_mul;

    use quickcheck::{Arbitrary, Gen, TestResult};
    use quickcheck_macros::quickcheck;

    fn z_matrix(rows: &[&[i64]]) -> Matrix<Z97> {
        Matrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&x| Z97::new(x)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn assert_two_sided_inverse(m: &Matrix<Z97>, inv: &Matrix<Z97>) -> Result<(), HillCipherError> {
        let id = identity_matrix(m.rows())?;
        assert_eq!(&matrix_mul(m, inv)?, &id);
        assert_eq!(&matrix_mul(inv, m)?, &id);
        Ok(())
    }

    #[test]
    fn test_inverse_2x2_closed_form() -> Result<(), HillCipherError> {
        let key = z_matrix(&[&[0, -3], &[5, 6]]);
        let inv = matrix_inverse(&key)?;
        assert_eq!(inv, z_matrix(&[&[78, 39], &[32, 0]]));
        assert_two_sided_inverse(&key, &inv)
    }

    #[test]
    fn test_inverse_2x2_singular() {
        let key = z_matrix(&[&[1, 2], &[2, 4]]);
        assert!(matches!(
            matrix_inverse(&key),
            Err(HillCipherError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_inverse_1x1() -> Result<(), HillCipherError> {
        let inv = matrix_inverse(&z_matrix(&[&[2]]))?;
        assert_eq!(inv, z_matrix(&[&[49]]));
        assert!(matrix_inverse(&z_matrix(&[&[97]])).is_err());
        Ok(())
    }

    #[test]
    fn test_inverse_5x5() -> Result<(), HillCipherError> {
        let key = z_matrix(&[
            &[0, -2, -4, -6, -8],
            &[3, 4, 1, -1, -3],
            &[6, 7, 8, 4, 2],
            &[9, 10, 11, 12, 7],
            &[12, 13, 14, 15, 16],
        ]);
        let inv = matrix_inverse(&key)?;
        let expected = z_matrix(&[
            &[36, 24, 63, 21, 60],
            &[91, 49, 29, 42, 63],
            &[40, 24, 44, 63, 46],
            &[21, 0, 58, 52, 29],
            &[2, 0, 0, 16, 85],
        ]);
        assert_eq!(inv, expected);
        assert_two_sided_inverse(&key, &inv)
    }

    #[test]
    fn test_inverse_needs_pivoting() -> Result<(), HillCipherError> {
        // Zero on the leading diagonal: only solvable by swapping rows.
        let key = z_matrix(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 0]]);
        let inv = matrix_inverse(&key)?;
        assert_eq!(inv, z_matrix(&[&[0, 0, 1], &[1, 0, 0], &[0, 1, 0]]));
        assert_two_sided_inverse(&key, &inv)
    }

    #[test]
    fn test_inverse_leaves_input_untouched() -> Result<(), HillCipherError> {
        let key = z_matrix(&[&[0, 2, 1], &[3, 0, 1], &[1, 1, 0]]);
        let snapshot = key.clone();
        let _ = matrix_inverse(&key)?;
        assert_eq!(key, snapshot);
        Ok(())
    }

    #[test]
    fn test_inverse_singular_duplicate_rows() {
        let key = z_matrix(&[&[1, 2, 3], &[1, 2, 3], &[4, 5, 6]]);
        assert!(matches!(
            matrix_inverse(&key),
            Err(HillCipherError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_inverse_singular_zero_column() {
        let key = z_matrix(&[&[0, 1, 2], &[0, 3, 4], &[0, 5, 6]]);
        assert!(matches!(
            matrix_inverse(&key),
            Err(HillCipherError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_inverse_singular_dependent_rows_mod_97() {
        // Third row is the sum of the first two, but only modulo 97.
        let key = z_matrix(&[&[50, 60, 70], &[80, 90, 10], &[33, 53, 80]]);
        assert!(matrix_inverse(&key).is_err());
    }

    #[test]
    fn test_inverse_rejects_non_square() {
        let m = z_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        assert!(matches!(
            matrix_inverse(&m),
            Err(HillCipherError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_select_pivot_prefers_largest_then_lowest_row() {
        let m = z_matrix(&[&[1, 0], &[9, 0], &[9, 0], &[3, 0]]);
        assert_eq!(select_pivot(&m, 0), 1);
        let zeros = z_matrix(&[&[0, 0], &[0, 0]]);
        assert_eq!(select_pivot(&zeros, 0), 0);
    }

    /// A random square matrix of size 1..=6.
    #[derive(Debug, Clone)]
    struct SquareMatrix(Matrix<Z97>);

    impl Arbitrary for SquareMatrix {
        fn arbitrary(g: &mut Gen) -> Self {
            let n = usize::arbitrary(g) % 6 + 1;
            let rows = (0..n)
                .map(|_| (0..n).map(|_| Z97::new(i64::arbitrary(g))).collect())
                .collect();
            SquareMatrix(Matrix::from_rows(rows).unwrap())
        }
    }

    #[quickcheck]
    fn prop_inverse_is_two_sided(m: SquareMatrix) -> TestResult {
        let m = m.0;
        match matrix_inverse(&m) {
            Ok(inv) => {
                let id = identity_matrix(m.rows()).unwrap();
                TestResult::from_bool(
                    matrix_mul(&m, &inv).unwrap() == id && matrix_mul(&inv, &m).unwrap() == id,
                )
            }
            Err(HillCipherError::NotInvertible(_)) => TestResult::discard(),
            Err(e) => TestResult::error(format!("unexpected error: {}", e)),
        }
    }

    #[quickcheck]
    fn prop_inverse_of_inverse_is_original(m: SquareMatrix) -> TestResult {
        let m = m.0;
        match matrix_inverse(&m) {
            Ok(inv) => TestResult::from_bool(matrix_inverse(&inv).unwrap() == m),
            Err(_) => TestResult::discard(),
        }
    }
}
