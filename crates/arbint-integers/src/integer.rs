//! Arbitrary precision integers.
//!
//! A [`BigInteger`] is a [`Sign`] plus a normalized [`LimbSeq`] magnitude.
//! Zero has exactly one representation: magnitude `[0]` with a positive
//! sign. Values are never mutated by arithmetic; every operation returns a
//! fresh integer.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use arbint_limbs::{LimbSeq, LIMB_BITS};
use num_traits::{One, Zero};

use crate::error::Result;
use crate::magnitude::compare_magnitude;
use crate::{arith, division, render};

/// The sign of a [`BigInteger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Zero or above.
    #[default]
    Positive,
}

impl Sign {
    /// Sign of a product or quotient of values with signs `self` and `other`.
    #[must_use]
    pub fn product(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInteger {
    sign: Sign,
    magnitude: LimbSeq,
}

impl BigInteger {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        Self {
            sign,
            magnitude: LimbSeq::from_u64(value.unsigned_abs()),
        }
    }

    /// Creates canonical zero with room for `reserve_hint` limbs.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity cannot be reserved.
    pub fn empty(reserve_hint: usize) -> Result<Self> {
        Ok(Self {
            sign: Sign::Positive,
            magnitude: LimbSeq::with_capacity(reserve_hint)?,
        })
    }

    /// Builds an integer from a sign and magnitude.
    ///
    /// The magnitude is normalized and a zero magnitude always gets a
    /// positive sign.
    #[must_use]
    pub fn from_parts(sign: Sign, mut magnitude: LimbSeq) -> Self {
        magnitude.normalize();
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
        Self { sign, magnitude }
    }

    /// Splits the integer into its sign and magnitude.
    #[must_use]
    pub fn into_parts(self) -> (Sign, LimbSeq) {
        (self.sign, self.magnitude)
    }

    /// Returns the sign.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the magnitude limbs.
    #[must_use]
    pub fn magnitude(&self) -> &LimbSeq {
        &self.magnitude
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.magnitude.is_zero()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.magnitude.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Returns the value with its sign flipped. Zero stays positive.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_parts(-self.sign, self.magnitude.clone())
    }

    /// Number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        let high = self.magnitude.high_limb();
        if high == 0 {
            return 0;
        }
        (self.magnitude.len() - 1) * LIMB_BITS as usize + (LIMB_BITS - high.leading_zeros()) as usize
    }

    /// Compares two integers: signs first, then magnitudes.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => compare_magnitude(&self.magnitude, &other.magnitude),
            (Sign::Negative, Sign::Negative) => compare_magnitude(&self.magnitude, &other.magnitude).reverse(),
        }
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()?;
        match self.sign {
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative if magnitude == i64::MIN.unsigned_abs() => Some(i64::MIN),
            Sign::Negative => i64::try_from(magnitude).ok().map(Neg::neg),
        }
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` for negative values and values above `u64::MAX`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            None
        } else {
            self.magnitude.to_u64()
        }
    }

    /// Renders the value as decimal text.
    ///
    /// # Errors
    ///
    /// Returns an error if scratch limbs cannot be allocated.
    pub fn to_decimal_string(&self) -> Result<String> {
        render::to_decimal_string(self)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.magnitude.is_one()
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = render::magnitude_to_decimal(&self.magnitude).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

// Arithmetic operators. The named functions in `arith` and `division`
// report failures; the operators panic on them like native integers do.
impl Add for BigInteger {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BigInteger> for BigInteger {
    type Output = Self;

    fn add(self, rhs: &BigInteger) -> Self::Output {
        &self + rhs
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        arith::add(self, rhs).expect("failed to allocate limbs for sum")
    }
}

impl Sub for BigInteger {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&BigInteger> for BigInteger {
    type Output = Self;

    fn sub(self, rhs: &BigInteger) -> Self::Output {
        &self - rhs
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        arith::subtract(self, rhs).expect("failed to allocate limbs for difference")
    }
}

impl Mul for BigInteger {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&BigInteger> for BigInteger {
    type Output = Self;

    fn mul(self, rhs: &BigInteger) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        arith::multiply(self, rhs).expect("failed to allocate limbs for product")
    }
}

impl Div for BigInteger {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&BigInteger> for BigInteger {
    type Output = Self;

    fn div(self, rhs: &BigInteger) -> Self::Output {
        &self / rhs
    }
}

impl Div for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: Self) -> Self::Output {
        match division::divide(self, rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("attempt to divide: {err}"),
        }
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let (sign, magnitude) = self.into_parts();
        Self::from_parts(-sign, magnitude)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: LimbSeq::from_u64(value),
        }
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}
