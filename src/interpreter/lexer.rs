use logos::{Lexer, Logos};

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token of an arithmetic expression.
///
/// Spaces between tokens are skipped. Any other character that does not start
/// one of these tokens is a lexical error.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// There is no exponent notation, no sign and no trailing `.`; a sign is
    /// a separate unary operator token.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value. Literals too large for `f64` become
///   infinity, as in any IEEE-754 decimal conversion.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Deepest nesting of signs, groups and exponents a single evaluation accepts.
pub const MAX_DEPTH: usize = 256;

/// Scanner position plus one token of lookahead.
///
/// A cursor is created fresh for every evaluation and owned by it. It is either
/// in bounds, with a lookahead token, or exhausted, once the lexer has run out
/// of input. Exhaustion is terminal and the cursor never moves backwards.
///
/// The cursor also counts how many factors are currently open, so that
/// recursion stays bounded by [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use calcpad::interpreter::lexer::{Cursor, Token};
///
/// let mut cursor = Cursor::new(" 1 + 2").unwrap();
/// assert_eq!(cursor.peek(), Some(Token::Number(1.0)));
/// assert_eq!(cursor.position(), 1);
///
/// cursor.advance().unwrap();
/// assert!(cursor.eat(Token::Plus).unwrap());
/// assert_eq!(cursor.peek(), Some(Token::Number(2.0)));
///
/// cursor.advance().unwrap();
/// assert!(cursor.is_exhausted());
/// ```
pub struct Cursor<'src> {
    lexer:     Lexer<'src, Token>,
    lookahead: Option<(Token, usize)>,
    depth:     usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor over `source` and loads the first token.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` if the input starts with a
    /// character that is not part of any token.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut cursor = Self { lexer:     Token::lexer(source),
                                lookahead: None,
                                depth:     0, };
        cursor.advance()?;
        Ok(cursor)
    }

    /// Moves past the lookahead token and loads the next one.
    ///
    /// Advancing an exhausted cursor is a no-op.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` if the next input cannot be
    /// tokenized.
    pub fn advance(&mut self) -> ParseResult<()> {
        self.lookahead = match self.lexer.next() {
            Some(Ok(token)) => Some((token, self.lexer.span().start)),
            Some(Err(())) => {
                return Err(ParseError::UnexpectedToken { token:    self.lexer.slice().to_string(),
                                                         position: self.lexer.span().start, });
            },
            None => None,
        };
        Ok(())
    }

    /// Returns the lookahead token, or `None` once the input is exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<Token> {
        self.lookahead.map(|(token, _)| token)
    }

    /// Returns the byte offset of the lookahead token, or the input length once
    /// the input is exhausted.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lookahead
            .map_or_else(|| self.lexer.source().len(), |(_, position)| position)
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.lookahead.is_none()
    }

    /// Consumes the lookahead token if it equals `expected`.
    ///
    /// # Returns
    /// `true` if the token was consumed, `false` if the cursor was left
    /// untouched.
    ///
    /// # Errors
    /// Propagates lexical errors from [`Cursor::advance`].
    pub fn eat(&mut self, expected: Token) -> ParseResult<bool> {
        if self.peek() == Some(expected) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Opens one more nesting level.
    ///
    /// # Errors
    /// Returns `ParseError::TooDeep` at the lookahead position once
    /// [`MAX_DEPTH`] levels are open.
    pub fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { position: self.position() });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost nesting level.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|t| t.expect("valid token")).collect()
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(tokens("12.5*(.5-3)"),
                   vec![Token::Number(12.5),
                        Token::Star,
                        Token::LParen,
                        Token::Number(0.5),
                        Token::Minus,
                        Token::Number(3.0),
                        Token::RParen]);
    }

    #[test]
    fn spaces_are_skipped() {
        assert_eq!(tokens("  7 ^  2 "),
                   vec![Token::Number(7.0), Token::Caret, Token::Number(2.0)]);
    }

    #[test]
    fn tabs_and_letters_are_rejected() {
        assert!(Token::lexer("1\t+2").any(|t| t.is_err()));
        assert!(Token::lexer("3x").any(|t| t.is_err()));
        assert!(Token::lexer("1e5").any(|t| t.is_err()));
    }

    #[test]
    fn cursor_reports_positions() {
        let mut cursor = Cursor::new("1 +  22").unwrap();
        assert_eq!(cursor.position(), 0);
        cursor.advance().unwrap();
        assert_eq!(cursor.position(), 2);
        cursor.advance().unwrap();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.peek(), Some(Token::Number(22.0)));
        cursor.advance().unwrap();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let mut cursor = Cursor::new("   ").unwrap();
        assert!(cursor.is_exhausted());
        cursor.advance().unwrap();
        assert!(cursor.is_exhausted());
        assert!(!cursor.eat(Token::Plus).unwrap());
    }

    #[test]
    fn eat_leaves_other_tokens_alone() {
        let mut cursor = Cursor::new("(1").unwrap();
        assert!(!cursor.eat(Token::RParen).unwrap());
        assert!(cursor.eat(Token::LParen).unwrap());
        assert_eq!(cursor.peek(), Some(Token::Number(1.0)));
    }

    #[test]
    fn nesting_is_bounded() {
        let mut cursor = Cursor::new("1").unwrap();
        for _ in 0..MAX_DEPTH {
            cursor.enter().unwrap();
        }
        assert_eq!(cursor.enter(), Err(ParseError::TooDeep { position: 0 }));

        cursor.leave();
        assert!(cursor.enter().is_ok());
    }

    #[test]
    fn lexical_error_carries_slice_and_position() {
        let mut cursor = Cursor::new("2 $").unwrap();
        let err = cursor.advance().unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { token:    "$".to_string(),
                                                 position: 2, });
    }
}
