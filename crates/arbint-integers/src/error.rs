//! Errors raised by the integer engine.

use arbint_limbs::AllocError;
use thiserror::Error;

/// Why a decimal literal was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No digit followed the optional whitespace and sign.
    NoDigits,
    /// A character other than `0`-`9` appeared in the digit run.
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDigits => write!(f, "no digits found"),
            Self::InvalidDigit { found, index } => {
                write!(f, "invalid digit {found:?} at byte {index}")
            }
        }
    }
}

/// Errors returned by integer construction and arithmetic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no input text supplied")]
    NullInput,

    #[error("invalid decimal integer: {0}")]
    Parse(ParseErrorKind),

    #[error("division by zero")]
    DivisionByZero,

    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] AllocError),
}

/// Result alias for integer operations.
pub type Result<T> = std::result::Result<T, Error>;
