/// Entry points of the evaluator.
///
/// Owns the `ParseResult` alias, the top-level `evaluate` call that requires
/// the whole input to be consumed, and the `expression` production.
pub mod core;

/// Binary operator levels.
///
/// Implements the left-associative additive and multiplicative levels of the
/// grammar, folding each operator into a running value as it is read.
pub mod binary;

/// Factor level.
///
/// Handles unary signs, parenthesised groups, number literals and the
/// right-associative exponent suffix.
pub mod unary;
