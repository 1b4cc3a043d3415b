use crate::errors::HillCipherError;
use crate::field::{Matrix, Z97, matrix_inverse};

use serde::{Deserialize, Serialize};

/// A square key matrix over Z_97.
///
/// Construction only checks the shape. Whether the key can decrypt is a
/// runtime property, see [`HillKey::is_valid`].
///
/// Keys (de)serialize as nested integer rows, e.g. `[[0,-3],[5,6]]`; the values
/// are reduced into the field and the shape is validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct HillKey {
    matrix: Matrix<Z97>,
}

impl HillKey {
    /// Builds a key from rows of integers, reducing each one mod 97.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidShape` if the rows are empty or not square,
    /// and `HillCipherError::ShapeMismatch` if they are ragged.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::cipher::HillKey;
    /// let key = HillKey::try_with(vec![vec![0, -3], vec![5, 6]]).unwrap();
    /// assert_eq!(key.size(), 2);
    /// assert!(HillKey::try_with(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
    /// ```
    pub fn try_with(rows: Vec<Vec<i64>>) -> Result<Self, HillCipherError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Z97::new).collect())
            .collect();

        Self::from_matrix(Matrix::from_rows(rows)?)
    }

    /// Wraps an existing field matrix.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidShape` if the matrix is not square.
    pub fn from_matrix(matrix: Matrix<Z97>) -> Result<Self, HillCipherError> {
        if !matrix.is_square() {
            return Err(HillCipherError::InvalidShape(format!(
                "Key matrix must be square, got {}x{}",
                matrix.rows(),
                matrix.cols()
            )));
        }

        Ok(HillKey { matrix })
    }

    /// Parses a key from JSON rows.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::SerializationError` for malformed JSON or a
    /// matrix that is not square.
    pub fn from_json(json: &str) -> Result<Self, HillCipherError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, HillCipherError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Block size N of an N×N key.
    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    pub fn matrix(&self) -> &Matrix<Z97> {
        &self.matrix
    }

    /// Derives the decryption key.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` if the key is singular.
    pub fn inverse(&self) -> Result<HillKey, HillCipherError> {
        Ok(HillKey {
            matrix: matrix_inverse(&self.matrix)?,
        })
    }

    /// Whether the key is invertible, i.e. usable for decryption.
    pub fn is_valid(&self) -> bool {
        match self.inverse() {
            Ok(_) => true,
            Err(HillCipherError::NotInvertible(_)) => false,
            Err(e) => {
                tracing::warn!(error = %e, "unexpected failure while inverting key");
                false
            }
        }
    }
}

impl TryFrom<Vec<Vec<i64>>> for HillKey {
    type Error = HillCipherError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        HillKey::try_with(rows)
    }
}

impl From<HillKey> for Vec<Vec<i64>> {
    fn from(key: HillKey) -> Self {
        key.matrix.map(i64::from).to_rows()
    }
}
