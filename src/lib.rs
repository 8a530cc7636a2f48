//! # calcpad
//!
//! calcpad is the core of a desktop calculator written in Rust.
//! It evaluates free-form infix expressions (`+ - * / ^`, parentheses, unary
//! signs) over `f64`, applies the keypad's single-operand functions, and
//! models the keypad session that turns key presses into display text.

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

use crate::{
    error::CalcError,
    interpreter::function::UnaryFunction,
    util::num::{ensure_finite, format_result},
};

/// Provides unified error types for parsing and calculation.
///
/// This module defines every error that can be raised while scanning or
/// parsing an expression, while validating the operand of a single-operand
/// function, or when a result has no finite value.
///
/// # Responsibilities
/// - Defines one error enum per failure family.
/// - Attaches byte positions to parse errors for diagnostics.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Scans, parses and evaluates expressions.
///
/// This module ties together the token scanner, the recursive-descent
/// evaluator and the single-operand functions.
///
/// # Responsibilities
/// - Tokenizes the expression and tracks the read position.
/// - Evaluates the grammar in one pass without building a tree.
/// - Validates and applies the keypad's function keys.
pub mod interpreter;
/// The headless keypad session.
///
/// Models the collaborator that owns the keystroke buffer: key labels, the
/// button layout, clearing, and mapping every failure to the `Error` display.
pub mod keypad;
/// Arithmetic and sign operators.
pub mod operator;
/// Helpers for turning results into display text.
pub mod util;

pub use interpreter::parser::core::evaluate;

/// Evaluates an expression for display.
///
/// Runs [`evaluate`] and additionally rejects infinite and NaN results, so
/// that a division by zero ends in an error instead of a number.
///
/// # Errors
/// Returns `CalcError::Syntax` if the expression does not parse and
/// `CalcError::NonFinite` if its value is not finite.
///
/// # Examples
/// ```
/// use calcpad::{calculate, error::CalcError};
///
/// assert_eq!(calculate("(1+2)*3"), Ok(9.0));
/// assert_eq!(calculate("1/0"), Err(CalcError::NonFinite(f64::INFINITY)));
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    ensure_finite(evaluate(expression)?)
}

/// Applies a single-operand function to the raw input for display.
///
/// The input is read as one numeric literal, never as an expression.
///
/// # Errors
/// Returns `CalcError::Domain` for invalid literals and out-of-domain operands,
/// and `CalcError::NonFinite` if the result overflows.
///
/// # Examples
/// ```
/// use calcpad::{apply_function, interpreter::function::UnaryFunction};
///
/// assert_eq!(apply_function(UnaryFunction::SquareRoot, "16"), Ok(4.0));
/// assert!(apply_function(UnaryFunction::SquareRoot, "-4").is_err());
/// ```
pub fn apply_function(function: UnaryFunction, input: &str) -> Result<f64, CalcError> {
    ensure_finite(function.evaluate(input)?)
}

/// Returns the display text of an expression.
///
/// This is [`calculate`] followed by the display formatting used by the
/// keypad: integral values lose their fractional part and every other value
/// keeps full precision.
///
/// # Errors
/// Returns an error if parsing fails or the value is not finite.
///
/// # Examples
/// ```
/// use calcpad::get_result;
///
/// assert_eq!(get_result("7*8").unwrap(), "56");
/// assert_eq!(get_result("1/3").unwrap(), "0.3333333333333333");
/// assert!(get_result("2+3x").is_err());
/// ```
pub fn get_result(expression: &str) -> Result<String, CalcError> {
    calculate(expression).map(format_result)
}
