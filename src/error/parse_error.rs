#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning or parsing an
/// expression.
///
/// Positions are byte offsets into the expression string. Every variant is the
/// same failure as far as the calculator display is concerned; the variants
/// only exist for diagnostics.
pub enum ParseError {
    /// Found a character or token that cannot start or continue the current
    /// production.
    UnexpectedToken {
        /// The offending input text.
        token:    String,
        /// The byte offset where the token starts.
        position: usize,
    },
    /// Reached the end of input while a number or a parenthesised group was
    /// still expected.
    UnexpectedEndOfInput {
        /// The byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset where `)` was expected.
        position: usize,
    },
    /// Found extra input after a complete expression.
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        token:    String,
        /// The byte offset where the trailing input starts.
        position: usize,
    },
    /// Signs, groups and exponents are nested deeper than the evaluator
    /// allows.
    TooDeep {
        /// The byte offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset at which the error was detected.
    ///
    /// # Example
    /// ```
    /// use calcpad::evaluate;
    ///
    /// assert_eq!(evaluate("2+3x").unwrap_err().position(), 3);
    /// assert_eq!(evaluate("(1+2").unwrap_err().position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::TooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra input after expression: {token}"),

            Self::TooDeep { position } => {
                write!(f, "Error at position {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
