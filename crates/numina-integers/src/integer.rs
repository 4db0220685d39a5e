//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! operations needed for integer-coefficient polynomial arithmetic.

use dashu::base::{Abs, BitTest, Gcd, Sign, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub};

use crate::Natural;

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig` and provides the operations
/// needed for polynomial coefficients and power exponents.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a sign and a magnitude.
    #[must_use]
    pub fn from_sign_magnitude(negative: bool, magnitude: Natural) -> Self {
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Self(IBig::from_parts(sign, magnitude))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the magnitude as an unsigned integer.
    #[must_use]
    pub fn unsigned_abs(&self) -> Natural {
        self.0.clone().unsigned_abs()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Returns true if this integer is `1` or `-1`.
    #[must_use]
    pub fn is_pm1(&self) -> bool {
        self.0 == IBig::ONE || self.0 == IBig::NEG_ONE
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.unsigned_abs().bit_len()
    }

    /// Computes the non-negative greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Returns true if `self` divides `other`.
    ///
    /// Zero divides only zero.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        if self.0.is_zero() {
            return other.0.is_zero();
        }
        (&other.0 % &self.0).is_zero()
    }

    /// Divides by `other` if the division is exact.
    #[must_use]
    pub fn div_exact(&self, other: &Self) -> Option<Self> {
        if other.0.is_zero() || !other.divides(self) {
            return None;
        }
        Some(Self(&self.0 / &other.0))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }

    /// Draws a random integer with at most `bits` bits and a random sign.
    ///
    /// The bit length itself is drawn uniformly from `0..=bits`, which
    /// makes small values (and zero) reasonably frequent.
    pub fn random<R: Rng>(rng: &mut R, bits: usize) -> Self {
        let magnitude = random_natural(rng, bits);
        Self::from_sign_magnitude(rng.gen_bool(0.5), magnitude)
    }

    /// Draws a random non-zero integer with at most `bits` bits.
    ///
    /// A request for zero bits still yields `±1`.
    pub fn random_not_zero<R: Rng>(rng: &mut R, bits: usize) -> Self {
        let value = Self::random(rng, bits);
        if value.is_zero() {
            if rng.gen_bool(0.5) {
                Self::one()
            } else {
                -Self::one()
            }
        } else {
            value
        }
    }
}

fn random_natural<R: Rng>(rng: &mut R, max_bits: usize) -> Natural {
    let bits = rng.gen_range(0..=max_bits);
    if bits == 0 {
        return UBig::ZERO;
    }
    let mut bytes = vec![0u8; bits.div_ceil(8)];
    rng.fill(bytes.as_mut_slice());
    UBig::from_le_bytes(&bytes) >> (bytes.len() * 8 - bits)
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl AddAssign for Integer {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<Natural> for Integer {
    fn from(value: Natural) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
