//! Text-in, text-out evaluation for input/output front ends.
//!
//! A front end (interactive prompt, file reader) hands over two operand
//! strings and an [`Operation`]; it gets back the decimal result or an
//! [`EvalError`] describing what went wrong and which operand caused it.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use thiserror::Error;

use arbint_integers::{self as integers, parse_decimal, BigInteger, Error};

/// An arithmetic operation selectable by a front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Subtract,
    /// `lhs * rhs`
    Multiply,
    /// `lhs / rhs`, truncated toward zero
    Divide,
    /// `lhs mod rhs`, in `[0, |rhs|)`
    Modulo,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
    ];

    /// Returns the operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
        }
    }

    /// Returns the 1-based menu number.
    #[must_use]
    pub fn menu_number(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
            Operation::Modulo => 5,
        }
    }

    /// Applies the operation to two integers.
    ///
    /// # Errors
    ///
    /// Propagates the engine error (division by zero, allocation failure).
    pub fn apply(self, lhs: &BigInteger, rhs: &BigInteger) -> integers::Result<BigInteger> {
        match self {
            Operation::Add => integers::add(lhs, rhs),
            Operation::Subtract => integers::subtract(lhs, rhs),
            Operation::Multiply => integers::multiply(lhs, rhs),
            Operation::Divide => integers::divide(lhs, rhs),
            Operation::Modulo => integers::modulo(lhs, rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = EvalError;

    /// Accepts a symbol (`+`), a name (`add`, case-insensitive) or a menu number (`1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "1" => Operation::Add,
            "-" | "sub" | "subtract" | "2" => Operation::Subtract,
            "*" | "x" | "mul" | "multiply" | "3" => Operation::Multiply,
            "/" | "div" | "divide" | "4" => Operation::Divide,
            "%" | "mod" | "modulo" | "5" => Operation::Modulo,
            _ => return Err(EvalError::UnknownOperation(s.to_owned())),
        };
        Ok(op)
    }
}

/// Which operand an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandSide {
    /// The first operand.
    Left,
    /// The second operand.
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Left => f.write_str("left"),
            OperandSide::Right => f.write_str("right"),
        }
    }
}

/// Errors reported to a front end.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// An operand was missing or not a decimal integer.
    #[error("{operand} operand: {source}")]
    Operand {
        /// The failing operand.
        operand: OperandSide,
        /// Why it was rejected.
        source: Error,
    },

    /// An operand exceeded [`EvalConfig::max_operand_digits`].
    #[error("{operand} operand has {digits} digits, the limit is {limit}")]
    OperandTooLarge {
        /// The oversized operand.
        operand: OperandSide,
        /// Its significant digit count.
        digits: usize,
        /// The configured limit.
        limit: usize,
    },

    /// The operation selector was not recognized.
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),

    /// The operation itself failed.
    #[error(transparent)]
    Arithmetic(#[from] Error),
}

/// Configuration for an [`Evaluator`].
#[derive(Clone, Debug)]
pub struct EvalConfig {
    /// Largest accepted operand, in significant decimal digits. `None` is unbounded.
    pub max_operand_digits: Option<usize>,
    /// Minimum batch size to evaluate requests in parallel.
    pub parallel_threshold: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_operand_digits: None,
            parallel_threshold: 64,
        }
    }
}

impl EvalConfig {
    /// Sets the operand size limit.
    #[must_use]
    pub fn with_max_operand_digits(mut self, limit: usize) -> Self {
        self.max_operand_digits = Some(limit);
        self
    }

    /// Sets the parallel batch threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// One queued evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// First operand, as decimal text.
    pub lhs: String,
    /// The operation to apply.
    pub op: Operation,
    /// Second operand, as decimal text.
    pub rhs: String,
}

impl Request {
    /// Creates a new request.
    pub fn new(lhs: impl Into<String>, op: Operation, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }
}

/// Evaluates operations on decimal text.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Parses both operands, applies `op` and renders the result.
    ///
    /// A `None` operand means the front end had no text to supply.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] naming the failing operand, or the engine
    /// error raised by the operation itself.
    #[tracing::instrument(level = "debug", skip(self, lhs, rhs))]
    pub fn evaluate(
        &self,
        lhs: Option<&str>,
        op: Operation,
        rhs: Option<&str>,
    ) -> Result<String, EvalError> {
        let lhs = self.operand(OperandSide::Left, lhs)?;
        let rhs = self.operand(OperandSide::Right, rhs)?;

        let result = match op.apply(&lhs, &rhs) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(error = %err, "Operation failed.");
                return Err(err.into());
            }
        };

        let text = result.to_decimal_string()?;
        tracing::debug!(result_digits = text.len(), "Evaluation finished.");
        Ok(text)
    }

    /// Like [`Evaluator::evaluate`], with the operation given as text.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnknownOperation`] for an unrecognized selector,
    /// otherwise as [`Evaluator::evaluate`].
    pub fn evaluate_text(&self, lhs: &str, selector: &str, rhs: &str) -> Result<String, EvalError> {
        let op = selector.parse()?;
        self.evaluate(Some(lhs), op, Some(rhs))
    }

    /// Evaluates a queued request.
    ///
    /// # Errors
    ///
    /// As [`Evaluator::evaluate`].
    pub fn evaluate_request(&self, request: &Request) -> Result<String, EvalError> {
        self.evaluate(Some(&request.lhs), request.op, Some(&request.rhs))
    }

    /// Evaluates independent requests, in parallel once the batch reaches
    /// the configured threshold. Results are in request order.
    pub fn evaluate_batch(&self, requests: &[Request]) -> Vec<Result<String, EvalError>> {
        if requests.len() < self.config.parallel_threshold {
            return requests.iter().map(|request| self.evaluate_request(request)).collect();
        }

        tracing::debug!(requests = requests.len(), "Evaluating batch in parallel.");
        requests
            .par_iter()
            .map(|request| self.evaluate_request(request))
            .collect()
    }

    fn operand(&self, side: OperandSide, text: Option<&str>) -> Result<BigInteger, EvalError> {
        if let (Some(limit), Some(text)) = (self.config.max_operand_digits, text) {
            let digits = significant_digits(text);
            if digits > limit {
                tracing::warn!(operand = %side, digits, limit, "Operand exceeds digit limit.");
                return Err(EvalError::OperandTooLarge {
                    operand: side,
                    digits,
                    limit,
                });
            }
        }

        parse_decimal(text).map_err(|source| {
            tracing::warn!(operand = %side, error = %source, "Rejected operand.");
            EvalError::Operand {
                operand: side,
                source,
            }
        })
    }
}

// Length of the digit run after whitespace, sign and leading zeros.
fn significant_digits(text: &str) -> usize {
    let text = text.trim_start();
    let unsigned = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    unsigned.trim_start_matches('0').len()
}
