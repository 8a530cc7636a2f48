/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing an
/// expression. Parse errors include unexpected characters, malformed numbers,
/// unbalanced parentheses, and leftover input after a complete expression.
pub mod parse_error;
/// Domain errors.
///
/// Errors raised by the single-operand functions before any computation takes
/// place: operands outside a function's domain and literals that are not
/// numbers at all.
pub mod domain_error;
/// Calculator errors.
///
/// The union of every failure the keypad and the command line can observe.
/// Each of them is shown to the user as the same `Error` display.
pub mod calc_error;

pub use calc_error::CalcError;
pub use domain_error::DomainError;
pub use parse_error::ParseError;
