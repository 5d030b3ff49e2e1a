//! Decimal rendering.
//!
//! The magnitude is split into base-10^9 chunks by repeated in-place
//! division, so each pass over the limbs yields nine digits at once.

use std::fmt::Write;

use arbint_limbs::{Limb, LimbSeq};

use crate::error::Result;
use crate::magnitude::div_small_in_place;
use crate::BigInteger;

const CHUNK_BASE: Limb = 1_000_000_000;
const CHUNK_DIGITS: usize = 9;

/// Renders `value` as canonical decimal text: no leading zeros, `-` only
/// for nonzero negatives.
///
/// # Errors
///
/// Returns an error if the scratch copy of the magnitude cannot be allocated.
pub fn to_decimal_string(value: &BigInteger) -> Result<String> {
    let digits = magnitude_to_decimal(value.magnitude())?;
    if value.is_negative() {
        let mut signed = String::with_capacity(digits.len() + 1);
        signed.push('-');
        signed.push_str(&digits);
        Ok(signed)
    } else {
        Ok(digits)
    }
}

/// Renders an unsigned magnitude as decimal digits.
///
/// # Errors
///
/// Returns an error if the scratch copy of the magnitude cannot be allocated.
pub fn magnitude_to_decimal(magnitude: &LimbSeq) -> Result<String> {
    if magnitude.is_zero() {
        return Ok("0".to_owned());
    }

    let chunks = decimal_chunks(magnitude)?;
    let mut out = String::with_capacity(chunks.len() * CHUNK_DIGITS);
    let mut chunks = chunks.iter().rev();
    if let Some(top) = chunks.next() {
        write!(out, "{top}").expect("writing to a String cannot fail");
    }
    for chunk in chunks {
        write!(out, "{chunk:0width$}", width = CHUNK_DIGITS).expect("writing to a String cannot fail");
    }
    Ok(out)
}

// Least significant chunk first.
fn decimal_chunks(magnitude: &LimbSeq) -> Result<Vec<Limb>> {
    let mut scratch = LimbSeq::from_slice(magnitude.as_slice())?;
    let mut chunks = Vec::with_capacity(magnitude.len() * 10 / 9 + 1);
    while !scratch.is_zero() {
        chunks.push(div_small_in_place(&mut scratch, CHUNK_BASE));
    }
    Ok(chunks)
}
