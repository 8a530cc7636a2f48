#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the input validation failures of the single-operand functions.
pub enum DomainError {
    /// Tried to take the square root of a negative number.
    NegativeSquareRoot,
    /// Tried to take the reciprocal of zero.
    ZeroReciprocal,
    /// The current input is not a single numeric literal.
    InvalidLiteral {
        /// The rejected input.
        literal: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeSquareRoot => {
                write!(f, "Domain error: Square root of a negative number.")
            },
            Self::ZeroReciprocal => write!(f, "Domain error: Reciprocal of zero."),
            Self::InvalidLiteral { literal } => {
                write!(f, "Domain error: '{literal}' is not a number.")
            },
        }
    }
}

impl std::error::Error for DomainError {}
