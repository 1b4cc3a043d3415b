//! Implementation of field ops for integers modulo 97.

use crate::errors::HillCipherError;

use num_integer::Integer;
use num_traits::{One, Zero};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The prime modulus of the field. Every non-zero element has an inverse.
pub const MODULUS: i64 = 97;

/// An element of the finite field Z_97.
///
/// The wrapped value is always the canonical representative in `[0, 96]`.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Z97(u8);

impl Z97 {
    /// Creates a field element from any integer, reducing it into `[0, 96]`.
    ///
    /// Negative values wrap around the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::field::Z97;
    /// assert_eq!(Z97::new(15).value(), 15);
    /// assert_eq!(Z97::new(97).value(), 0);
    /// assert_eq!(Z97::new(-3).value(), 94);
    /// assert_eq!(Z97::new(200).value(), 6);
    /// ```
    pub fn new(value: i64) -> Self {
        Z97(value.mod_floor(&MODULUS) as u8)
    }

    /// Returns the canonical representative in `[0, 96]`.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Computes the multiplicative inverse `a^-1 mod 97`.
    ///
    /// Uses the Extended Euclidean Algorithm. Since 97 is prime the inverse
    /// exists for every non-zero element.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DivisionByZero` if `self` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::field::Z97;
    /// let three = Z97::new(3);
    /// assert_eq!(three.inv().unwrap(), Z97::new(65)); // 3 * 65 = 195 = 1 mod 97
    /// assert!(Z97::new(0).inv().is_err());
    /// ```
    pub fn inv(self) -> Result<Self, HillCipherError> {
        if self.is_zero() {
            return Err(HillCipherError::DivisionByZero);
        }

        let egcd = i64::from(self.0).extended_gcd(&MODULUS);
        debug_assert_eq!(egcd.gcd, 1);

        Ok(Z97::new(egcd.x))
    }

    /// Computes `self / rhs`, i.e. `self * rhs^-1`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DivisionByZero` if `rhs` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::field::Z97;
    /// let a = Z97::new(10);
    /// let b = Z97::new(5);
    /// assert_eq!(a.checked_div(b).unwrap(), Z97::new(2));
    /// assert!(a.checked_div(Z97::new(0)).is_err());
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self, HillCipherError> {
        Ok(self * rhs.inv()?)
    }
}

impl From<i64> for Z97 {
    fn from(value: i64) -> Self {
        Z97::new(value)
    }
}

impl From<Z97> for i64 {
    fn from(value: Z97) -> Self {
        i64::from(value.0)
    }
}

impl fmt::Display for Z97 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Z97 {
    type Output = Z97;

    fn add(self, rhs: Z97) -> Z97 {
        Z97::new(i64::from(self.0) + i64::from(rhs.0))
    }
}

impl Sub for Z97 {
    type Output = Z97;

    fn sub(self, rhs: Z97) -> Z97 {
        Z97::new(i64::from(self.0) - i64::from(rhs.0))
    }
}

impl Mul for Z97 {
    type Output = Z97;

    fn mul(self, rhs: Z97) -> Z97 {
        Z97::new(i64::from(self.0) * i64::from(rhs.0))
    }
}

impl Neg for Z97 {
    type Output = Z97;

    fn neg(self) -> Z97 {
        Z97::new(-i64::from(self.0))
    }
}

impl AddAssign for Z97 {
    fn add_assign(&mut self, rhs: Z97) {
        *self = *self + rhs;
    }
}

impl SubAssign for Z97 {
    fn sub_assign(&mut self, rhs: Z97) {
        *self = *self - rhs;
    }
}

impl MulAssign for Z97 {
    fn mul_assign(&mut self, rhs: Z97) {
        *self = *self * rhs;
    }
}

impl Zero for Z97 {
    fn zero() -> Self {
        Z97(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for Z97 {
    fn one() -> Self {
        Z97(1)
    }
}

impl Sum for Z97 {
    fn sum<I: Iterator<Item = Z97>>(iter: I) -> Self {
        iter.fold(Z97::zero(), Add::add)
    }
}
