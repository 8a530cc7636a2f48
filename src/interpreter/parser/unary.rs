use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Cursor, MAX_DEPTH, Token},
        parser::core::{ParseResult, parse_expression},
    },
    operator::{BinaryOperator, UnaryOperator},
};

/// Parses a factor, the tightest-binding unit of the grammar.
///
/// Supports prefix signs:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Signs are right-recursive, so `--3` is parsed as `-(-(3))`. A sign binds
/// looser than `^`: `-3^2` is `-(3^2)`, while `(-3)^2` squares the
/// parenthesised value.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | primary ("^" factor)?
/// ```
/// Every factor opens one nesting level on the cursor, which bounds the
/// recursion through signs, groups and exponents.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the start of a factor.
///
/// # Returns
/// The value of the factor.
///
/// # Errors
/// Returns `TooDeep` once more than [`MAX_DEPTH`] factors are nested.
pub(crate) fn parse_factor(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    cursor.enter()?;
    let value = parse_signed(cursor);
    cursor.leave();
    value
}

fn parse_signed(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    if let Some(op) = cursor.peek().and_then(token_to_unary_operator) {
        cursor.advance()?;
        let operand = parse_factor(cursor)?;
        return Ok(op.apply(operand));
    }

    let base = parse_primary(cursor)?;
    parse_exponent(cursor, base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are:
/// - number literals
/// - parenthesized expressions
///
/// This function does not handle signs or the exponent suffix.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the start of a primary expression.
///
/// # Returns
/// The value of the primary expression or a `ParseError` on failure.
fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    match cursor.peek() {
        Some(Token::Number(value)) => {
            cursor.advance()?;
            Ok(value)
        },
        Some(Token::LParen) => parse_grouping(cursor),
        Some(token) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                         position: cursor.position(), }),
        None => Err(ParseError::UnexpectedEndOfInput { position: cursor.position() }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// - `ExpectedClosingParen` if the group is not closed.
/// - Propagates any errors from the inner expression.
fn parse_grouping(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    cursor.advance()?;
    let value = parse_expression(cursor)?;

    if !cursor.eat(Token::RParen)? {
        return Err(ParseError::ExpectedClosingParen { position: cursor.position() });
    }
    Ok(value)
}

/// Parses the optional exponent suffix of a primary expression.
///
/// The exponent is itself a factor, which makes `^` right-associative:
/// `2^3^2` is `2^(3^2)`. It also lets the exponent carry a sign, as in
/// `2^-1`.
///
/// # Parameters
/// - `cursor`: Cursor positioned right after the base.
/// - `base`: The already evaluated base.
///
/// # Returns
/// `base` raised to the exponent, or `base` itself if no `^` follows.
fn parse_exponent(cursor: &mut Cursor<'_>, base: f64) -> ParseResult<f64> {
    if cursor.eat(Token::Caret)? {
        let exponent = parse_factor(cursor)?;
        return Ok(BinaryOperator::Pow.apply(base, exponent));
    }
    Ok(base)
}

/// Maps a token to the sign operator it denotes at factor position.
const fn token_to_unary_operator(token: Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}
