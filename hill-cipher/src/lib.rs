//! A Hill cipher over a 97-symbol alphabet.
//!
//! Text is mapped into the prime field Z_97, cut into blocks the size of an
//! invertible key matrix, and each block is multiplied by the key. Decryption
//! multiplies by the key's inverse, computed with Gauss-Jordan elimination.
//!
//! ```
//! use hill_cipher::{HillKey, decrypt, encrypt, is_valid_key};
//!
//! let key = HillKey::try_with(vec![vec![0, -3], vec![5, 6]]).unwrap();
//! assert!(is_valid_key(&key));
//!
//! let ciphertext = encrypt(&key, "Hill Cipher!").unwrap();
//! assert_eq!(decrypt(&key, &ciphertext).unwrap(), "Hill Cipher!");
//! ```
//!
//! This is a classical cipher and offers no real security.

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod field;
pub mod preset;

pub use cipher::{HillCipher, HillKey, decrypt, encrypt, is_valid_key};
pub use errors::HillCipherError;
