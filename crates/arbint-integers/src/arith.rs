//! Signed addition, subtraction and multiplication.
//!
//! Each function takes its operands by shared reference and returns a new
//! integer. Where a sign has to be flipped to reuse the opposite operation,
//! the flip happens on a derived temporary, never on the caller's value.

use std::cmp::Ordering;

use num_traits::Zero;

use crate::error::Result;
use crate::magnitude::{add_magnitude, compare_magnitude, mul_magnitude, sub_magnitude};
use crate::BigInteger;

/// Computes `a + b`.
///
/// # Errors
///
/// Returns an error if the result cannot be allocated.
pub fn add(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
    if a.sign() != b.sign() {
        // a + (-|b|) = a - |b|, and (-|a|) + b = b - |a|
        return if a.is_negative() {
            subtract(b, &a.abs())
        } else {
            subtract(a, &b.abs())
        };
    }

    let magnitude = add_magnitude(a.magnitude(), b.magnitude())?;
    Ok(BigInteger::from_parts(a.sign(), magnitude))
}

/// Computes `a - b`.
///
/// # Errors
///
/// Returns an error if the result cannot be allocated.
pub fn subtract(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
    if a.sign() != b.sign() {
        return add(a, &b.negated());
    }

    let (sign, magnitude) = match compare_magnitude(a.magnitude(), b.magnitude()) {
        Ordering::Equal => return Ok(BigInteger::zero()),
        Ordering::Greater => (a.sign(), sub_magnitude(a.magnitude(), b.magnitude())?),
        Ordering::Less => (-a.sign(), sub_magnitude(b.magnitude(), a.magnitude())?),
    };
    Ok(BigInteger::from_parts(sign, magnitude))
}

/// Computes `a * b`.
///
/// # Errors
///
/// Returns an error if the result cannot be allocated.
pub fn multiply(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
    if a.is_zero() || b.is_zero() {
        return Ok(BigInteger::zero());
    }

    let magnitude = mul_magnitude(a.magnitude(), b.magnitude())?;
    Ok(BigInteger::from_parts(a.sign().product(b.sign()), magnitude))
}

/// Returns `-a`. Zero stays positive.
#[must_use]
pub fn negate(a: &BigInteger) -> BigInteger {
    a.negated()
}

/// Three-way comparison of two integers.
#[must_use]
pub fn compare(a: &BigInteger, b: &BigInteger) -> Ordering {
    a.compare(b)
}
