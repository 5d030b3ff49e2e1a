//! # arbint
//!
//! Exact signed integer arithmetic beyond native word width.
//!
//! arbint stores integers as a sign plus base-2^32 limbs and provides
//! parsing, comparison, the four arithmetic operations, a canonical
//! non-negative modulo, and decimal rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use arbint::prelude::*;
//!
//! let a: BigInteger = "99999999999999999999".parse().unwrap();
//! let b = BigInteger::new(1);
//! assert_eq!((&a + &b).to_string(), "100000000000000000000");
//!
//! let evaluator = Evaluator::default();
//! assert_eq!(evaluator.evaluate_text("-7", "mod", "2").unwrap(), "1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calc;


pub use arbint_integers as integers;
pub use arbint_limbs as limbs;

pub use arbint_integers::{
    add, compare, div_mod, divide, modulo, multiply, negate, parse_decimal, subtract,
    to_decimal_string, BigInteger, Error, ParseErrorKind, Result, Sign,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calc::{EvalConfig, EvalError, Evaluator, Operation, Request};
    pub use arbint_integers::{BigInteger, Error, Sign};
    pub use arbint_limbs::LimbSeq;
    pub use num_traits::{One, Zero};
}
