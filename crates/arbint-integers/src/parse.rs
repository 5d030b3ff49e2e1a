//! Decimal parsing.

use std::str::FromStr;

use arbint_limbs::Limb;

use crate::error::{Error, ParseErrorKind, Result};
use crate::magnitude::mul_small_add_in_place;
use crate::{BigInteger, Sign};

// A limb holds a little over 9.6 decimal digits.
const DIGITS_PER_LIMB: usize = 9;

/// Parses a decimal integer.
///
/// Accepts leading ASCII whitespace, an optional `+` or `-`, then one or
/// more digits. Redundant leading zeros are skipped and `-0` parses as
/// (positive) zero. `None` stands for input that was never supplied.
///
/// # Errors
///
/// Returns [`Error::NullInput`] for `None`, [`Error::Parse`] when no digits
/// are present or a non-digit appears, or an allocation error.
pub fn parse_decimal(text: Option<&str>) -> Result<BigInteger> {
    let text = text.ok_or(Error::NullInput)?;
    let bytes = text.as_bytes();

    let mut pos = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let mut sign = Sign::Positive;
    match bytes.get(pos) {
        Some(b'+') => pos += 1,
        Some(b'-') => {
            sign = Sign::Negative;
            pos += 1;
        }
        _ => {}
    }

    // Keep the last character so a lone "0" survives.
    while pos + 1 < bytes.len() && bytes[pos] == b'0' {
        pos += 1;
    }

    let digits = &text[pos..];
    if digits.is_empty() {
        return Err(Error::Parse(ParseErrorKind::NoDigits));
    }
    if let Some((offset, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(Error::Parse(ParseErrorKind::InvalidDigit {
            found,
            index: pos + offset,
        }));
    }

    let (_, mut magnitude) = BigInteger::empty(digits.len() / DIGITS_PER_LIMB + 1)?.into_parts();
    for digit in digits.bytes() {
        mul_small_add_in_place(&mut magnitude, 10, Limb::from(digit - b'0'))?;
    }

    Ok(BigInteger::from_parts(sign, magnitude))
}

impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_decimal(Some(s))
    }
}
