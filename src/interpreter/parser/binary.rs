use crate::{
    interpreter::{
        lexer::{Cursor, Token},
        parser::{core::ParseResult, unary::parse_factor},
    },
    operator::BinaryOperator,
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each operator is
/// applied as soon as its right operand is known, so `2-3-4` is `(2-3)-4`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first term.
///
/// # Returns
/// The value of the additive chain.
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut left = parse_multiplicative(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            cursor.advance()?;
            let right = parse_multiplicative(cursor)?;
            left = op.apply(left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, so `2/4/2` is `(2/4)/2`.
/// A zero divisor is not checked.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first factor.
///
/// # Returns
/// The value of the multiplicative chain.
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut left = parse_factor(cursor)?;
    loop {
        if let Some(token) = cursor.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            cursor.advance()?;
            let right = parse_factor(cursor)?;
            left = op.apply(left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*`, `/` and `^`, and `None`
/// for numbers and parentheses.
///
/// # Example
/// ```
/// use calcpad::{
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
///     operator::BinaryOperator,
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Number(_) | Token::LParen | Token::RParen => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::parser::core::evaluate;

    #[test]
    fn additive_is_left_associative() {
        assert_eq!(evaluate("2-3-4").unwrap(), -5.0);
        assert_eq!(evaluate("10-2+3").unwrap(), 11.0);
    }

    #[test]
    fn multiplicative_is_left_associative() {
        assert_eq!(evaluate("2/4/2").unwrap(), 0.25);
        assert_eq!(evaluate("8/2*4").unwrap(), 16.0);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(evaluate("1+2*3").unwrap(), 7.0);
        assert_eq!(evaluate("7*8").unwrap(), 56.0);
        assert_eq!(evaluate("1-6/3").unwrap(), -1.0);
    }

    #[test]
    fn missing_right_operand_fails() {
        assert!(evaluate("2+").is_err());
        assert!(evaluate("2*").is_err());
        assert!(evaluate("2*/3").is_err());
    }
}
