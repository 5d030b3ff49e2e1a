//! Truncating division and canonical non-negative modulo.
//!
//! The quotient is found by repeated doubling: each round locates the
//! largest `2^k * |b|` that still fits in the running remainder, removes
//! it, and credits `2^k` to the quotient. This is quadratic in the operand
//! size, which is acceptable for the magnitudes this crate targets.

use std::cmp::Ordering;

use arbint_limbs::LimbSeq;
use num_traits::Zero;

use crate::arith::{add, multiply, subtract};
use crate::error::{Error, Result};
use crate::magnitude::{add_magnitude, compare_magnitude, sub_magnitude};
use crate::BigInteger;

/// Computes `a / b`, truncating toward zero.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `b` is zero, or an allocation error.
pub fn divide(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(BigInteger::zero());
    }

    let quotient = doubling_quotient(a.magnitude(), b.magnitude())?;
    Ok(BigInteger::from_parts(a.sign().product(b.sign()), quotient))
}

/// Computes `a mod n` as the canonical remainder in `[0, |n|)`.
///
/// The result does not take the sign of either operand: `-7 mod 2 == 1`
/// and `7 mod -2 == 1`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `n` is zero, or an allocation error.
pub fn modulo(a: &BigInteger, n: &BigInteger) -> Result<BigInteger> {
    div_mod(a, n).map(|(_, remainder)| remainder)
}

/// Computes the truncated quotient and the canonical remainder together.
///
/// `a == quotient * n + remainder - k * |n|` where `k` is 1 when the
/// truncated remainder was negative and 0 otherwise.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `n` is zero, or an allocation error.
pub fn div_mod(a: &BigInteger, n: &BigInteger) -> Result<(BigInteger, BigInteger)> {
    let quotient = divide(a, n)?;
    let remainder = subtract(a, &multiply(&quotient, n)?)?;
    let remainder = if remainder.is_negative() {
        add(&remainder, &n.abs())?
    } else {
        remainder
    };
    Ok((quotient, remainder))
}

fn doubling_quotient(dividend: &LimbSeq, divisor: &LimbSeq) -> Result<LimbSeq> {
    let mut remaining = dividend.clone();
    let mut quotient = LimbSeq::zero();
    let mut rounds = 0usize;

    while compare_magnitude(&remaining, divisor) != Ordering::Less {
        let mut shifted = divisor.clone();
        let mut step = LimbSeq::from_limb(1);
        loop {
            let doubled = add_magnitude(&shifted, &shifted)?;
            if compare_magnitude(&doubled, &remaining) == Ordering::Greater {
                break;
            }
            shifted = doubled;
            step = add_magnitude(&step, &step)?;
        }

        remaining = sub_magnitude(&remaining, &shifted)?;
        quotient = add_magnitude(&quotient, &step)?;
        rounds += 1;
    }

    tracing::trace!(
        rounds,
        dividend_limbs = dividend.len(),
        divisor_limbs = divisor.len(),
        "doubling division finished"
    );
    Ok(quotient)
}
