//! # arbint-integers
//!
//! Arbitrary precision signed integers for arbint.
//!
//! This crate provides:
//! - [`BigInteger`]: a sign plus a base-2^32 limb magnitude
//! - Decimal parsing and chunked decimal rendering
//! - Addition, subtraction and schoolbook multiplication
//! - Truncating division by repeated doubling, and a canonical non-negative modulo
//!
//! ## Conventions
//!
//! - Operands are always borrowed; results are freshly allocated
//! - Zero is never negative
//! - Named operations return [`Result`]; the `std::ops` operators panic where
//!   the named operation would fail

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod division;
pub mod error;
pub mod integer;
pub mod magnitude;
pub mod parse;
pub mod render;

#[cfg(test)]
mod proptests;

pub use arith::{add, compare, multiply, negate, subtract};
pub use division::{div_mod, divide, modulo};
pub use error::{Error, ParseErrorKind, Result};
pub use integer::{BigInteger, Sign};
pub use parse::parse_decimal;
pub use render::to_decimal_string;
