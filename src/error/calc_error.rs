use crate::error::{DomainError, ParseError};

#[derive(Debug, Clone, PartialEq)]
/// Represents every failure a calculation can end in.
///
/// The keypad shows all of them as `Error`; the variants are kept apart for
/// logging and for callers that want to tell them apart.
pub enum CalcError {
    /// The expression could not be parsed.
    Syntax(ParseError),
    /// A single-operand function rejected its operand.
    Domain(DomainError),
    /// The computation produced infinity or NaN.
    NonFinite(f64),
    /// A key label that is not on the keypad.
    UnknownKey {
        /// The rejected label.
        label: String,
    },
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl From<DomainError> for CalcError {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Domain(e) => write!(f, "{e}"),
            Self::NonFinite(value) => write!(f, "Result is not a finite number: {value}."),
            Self::UnknownKey { label } => write!(f, "Unknown key '{label}'."),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Domain(e) => Some(e),
            Self::NonFinite(_) | Self::UnknownKey { .. } => None,
        }
    }
}
