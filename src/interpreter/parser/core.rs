use crate::{
    error::ParseError,
    interpreter::{lexer::Cursor, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses and evaluates an arithmetic expression in a single pass.
///
/// A fresh [`Cursor`] is created for the call, the `expression` production is
/// run, and the cursor must then be exhausted. No syntax tree is built: every
/// production folds directly into an `f64`.
///
/// Division by zero is not an error here. The IEEE-754 result (infinity or
/// NaN) is returned as-is and it is up to the caller to reject it.
///
/// # Parameters
/// - `source`: The expression, e.g. `"-(1 + 2) * 3^2"`.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `UnexpectedToken` for characters outside the expression alphabet and for
///   tokens that cannot start a factor.
/// - `UnexpectedEndOfInput` for empty or truncated input.
/// - `ExpectedClosingParen` for an unmatched `(`.
/// - `UnexpectedTrailingTokens` if input remains after a complete expression.
///
/// # Example
/// ```
/// use calcpad::interpreter::parser::core::evaluate;
///
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
/// assert_eq!(evaluate(" -3^2 ").unwrap(), -9.0);
/// assert!(evaluate("(1+2").is_err());
/// ```
pub fn evaluate(source: &str) -> ParseResult<f64> {
    let mut cursor = Cursor::new(source)?;
    let value = parse_expression(&mut cursor)?;

    match cursor.peek() {
        None => Ok(value),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                                  position: cursor.position(), }),
    }
}

/// Parses a full expression.
///
/// This is the lowest-precedence production and the one used inside
/// parentheses.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of the expression.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    parse_additive(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_input_must_be_consumed() {
        assert_eq!(evaluate("2 3"),
                   Err(ParseError::UnexpectedTrailingTokens { token:    "3".to_string(),
                                                              position: 2, }));
        assert_eq!(evaluate("(1))"),
                   Err(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                              position: 3, }));
    }

    #[test]
    fn empty_and_blank_input_fail() {
        assert_eq!(evaluate(""), Err(ParseError::UnexpectedEndOfInput { position: 0 }));
        assert_eq!(evaluate("   "), Err(ParseError::UnexpectedEndOfInput { position: 3 }));
    }

    #[test]
    fn stray_character_fails() {
        assert_eq!(evaluate("2+3x"),
                   Err(ParseError::UnexpectedToken { token:    "x".to_string(),
                                                     position: 3, }));
    }

    #[test]
    fn division_by_zero_passes_through() {
        assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
        assert!(evaluate("0/0").unwrap().is_nan());
    }
}
