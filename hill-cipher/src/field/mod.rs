//! # Field Module
//!
//! Arithmetic over the prime field Z_97 ([`Z97`]), a generic dense [`Matrix`],
//! and the matrix operations the cipher is built from.

pub mod inverse;
pub mod math;
pub mod matrix;
pub mod matrix_ops;

pub use inverse::matrix_inverse;
pub use math::{MODULUS, Z97};
pub use matrix::Matrix;
pub use matrix_ops::{identity_matrix, matrix_mul};
