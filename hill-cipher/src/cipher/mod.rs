//! # Cipher Module
//!
//! The Hill cipher itself: text is cut into blocks the size of the key, every
//! block is multiplied by the key matrix, and decryption runs the same
//! pipeline with the inverted key.

pub mod key;

pub use key::HillKey;

use crate::codec::{blocks_to_text, pad_to_block, text_to_blocks};
use crate::errors::HillCipherError;
use crate::field::{Matrix, Z97, matrix_mul};

use tracing::debug;

/// Encrypts `plaintext` with `key`.
///
/// The plaintext is right-padded with spaces to a multiple of the key size,
/// so the ciphertext is exactly as long as the padded plaintext.
///
/// # Errors
///
/// Returns `HillCipherError::UnknownSymbol` if the plaintext contains a
/// character outside the alphabet. Nothing is produced in that case.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::{HillKey, encrypt};
/// let key = HillKey::try_with(vec![vec![0, -3], vec![5, 6]]).unwrap();
/// assert_eq!(encrypt(&key, "Hill Cipher!").unwrap(), "`t.T?f^cH2\\d");
/// ```
pub fn encrypt(key: &HillKey, plaintext: &str) -> Result<String, HillCipherError> {
    let padded = pad_to_block(plaintext, key.size())?;
    let blocks = text_to_blocks(&padded, key.size())?;

    debug!(
        block_size = key.size(),
        blocks = blocks.len(),
        "applying key to message blocks"
    );

    let transformed = blocks
        .iter()
        .map(|block| matrix_mul(key.matrix(), block))
        .collect::<Result<Vec<Matrix<Z97>>, _>>()?;

    Ok(blocks_to_text(&transformed))
}

/// Decrypts `ciphertext`, i.e. encrypts it with the inverse of `key`.
///
/// # Errors
///
/// Returns `HillCipherError::NotInvertible` if `key` is singular and
/// `HillCipherError::UnknownSymbol` for characters outside the alphabet.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::{HillKey, decrypt};
/// let key = HillKey::try_with(vec![vec![0, -3], vec![5, 6]]).unwrap();
/// assert_eq!(decrypt(&key, "`t.T?f^cH2\\d").unwrap(), "Hill Cipher!");
/// ```
pub fn decrypt(key: &HillKey, ciphertext: &str) -> Result<String, HillCipherError> {
    encrypt(&key.inverse()?, ciphertext)
}

/// Reports whether `key` is invertible, without exposing the inverse.
pub fn is_valid_key(key: &HillKey) -> bool {
    key.is_valid()
}

/// A key paired with its precomputed inverse.
///
/// Useful when the same key decrypts many messages: the inversion happens
/// once, in [`HillCipher::try_with`].
#[derive(Debug, Clone)]
pub struct HillCipher {
    key: HillKey,
    inverse: HillKey,
}

impl HillCipher {
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` if `key` is singular.
    pub fn try_with(key: HillKey) -> Result<Self, HillCipherError> {
        let inverse = key.inverse()?;
        Ok(HillCipher { key, inverse })
    }

    pub fn key(&self) -> &HillKey {
        &self.key
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, HillCipherError> {
        encrypt(&self.key, plaintext)
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String, HillCipherError> {
        encrypt(&self.inverse, ciphertext)
    }
}
