//! # tally
//!
//! tally is an integer calculator written in Rust. It reads infix
//! expressions with `+ - * /`, parentheses and variables, converts them to
//! postfix form with the shunting-yard algorithm and reduces them on a stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcError, interpreter::evaluator::core::Evaluator};

/// Provides the error types for reading and evaluating expressions.
///
/// This module defines every failure the calculator can report, split by
/// phase: parse errors for malformed input and runtime errors for problems
/// found while reducing the postfix sequence.
///
/// # Responsibilities
/// - Defines error enums for each phase and a facade-level wrapper.
/// - Carries the offending fragment of input where there is one.
/// - Distinguishes malformed input from arithmetic faults.
pub mod error;
/// Turns expression strings into integers.
///
/// This module ties together the token model, the tokenizer, the
/// infix-to-postfix converter, the postfix evaluator and the variable store
/// behind a single [`Evaluator`] facade.
///
/// # Responsibilities
/// - Classifies each word of the input into tokens.
/// - Orders operators by a configurable precedence table.
/// - Evaluates with checked 64-bit arithmetic.
pub mod interpreter;
/// The line-oriented calculator session.
///
/// Dispatches commands, assignments, variable lookups and expressions to the
/// evaluator and turns the outcome into the text shown to the user.
pub mod repl;

/// Evaluates a single expression with no variables.
///
/// # Errors
/// Returns an error if the expression is malformed or its evaluation fails.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(evaluate("3 / 4").unwrap(), 0);
///
/// // Unbalanced parentheses are rejected.
/// assert!(evaluate("(2 + 3").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, CalcError> {
    Evaluator::new().evaluate(expression)
}
