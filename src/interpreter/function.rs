use crate::error::DomainError;

/// The single-operand functions of the keypad.
///
/// Each of them takes the whole current input as one numeric literal, checks
/// that the operand is inside its domain, and applies a fixed transformation.
/// They never go through the expression grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryFunction {
    /// `sqrt`: square root, undefined for negative operands.
    SquareRoot,
    /// `x^2`: the operand multiplied by itself.
    Square,
    /// `1/x`: reciprocal, undefined for zero.
    Reciprocal,
    /// `sin`: sine of an angle in degrees.
    Sine,
    /// `cos`: cosine of an angle in degrees.
    Cosine,
    /// `tan`: tangent of an angle in degrees.
    Tangent,
}

impl UnaryFunction {
    /// Every function, in keypad order.
    pub const ALL: [Self; 6] = [Self::SquareRoot,
                                Self::Square,
                                Self::Reciprocal,
                                Self::Sine,
                                Self::Cosine,
                                Self::Tangent];

    /// Returns the keypad label of the function.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SquareRoot => "sqrt",
            Self::Square => "x^2",
            Self::Reciprocal => "1/x",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
        }
    }

    /// Looks a function up by its keypad label.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::function::UnaryFunction;
    ///
    /// assert_eq!(UnaryFunction::from_label("1/x"), Some(UnaryFunction::Reciprocal));
    /// assert_eq!(UnaryFunction::from_label("log"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Checks that `operand` lies inside the function's domain.
    ///
    /// # Errors
    /// - `NegativeSquareRoot` for `sqrt` of a negative number.
    /// - `ZeroReciprocal` for `1/x` of zero.
    pub fn validate(self, operand: f64) -> Result<(), DomainError> {
        match self {
            Self::SquareRoot if operand < 0.0 => Err(DomainError::NegativeSquareRoot),
            Self::Reciprocal if operand == 0.0 => Err(DomainError::ZeroReciprocal),
            _ => Ok(()),
        }
    }

    /// Applies the function without any domain check.
    #[must_use]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::SquareRoot => operand.sqrt(),
            Self::Square => operand * operand,
            Self::Reciprocal => operand.recip(),
            Self::Sine => operand.to_radians().sin(),
            Self::Cosine => operand.to_radians().cos(),
            Self::Tangent => operand.to_radians().tan(),
        }
    }

    /// Parses `literal`, validates it and applies the function.
    ///
    /// # Errors
    /// Returns `InvalidLiteral` if `literal` is not a single number, or the
    /// domain error reported by [`UnaryFunction::validate`].
    ///
    /// # Example
    /// ```
    /// use calcpad::{error::DomainError, interpreter::function::UnaryFunction};
    ///
    /// assert_eq!(UnaryFunction::SquareRoot.evaluate("16"), Ok(4.0));
    /// assert_eq!(UnaryFunction::SquareRoot.evaluate("-4"),
    ///            Err(DomainError::NegativeSquareRoot));
    /// ```
    pub fn evaluate(self, literal: &str) -> Result<f64, DomainError> {
        let operand = parse_literal(literal)?;
        self.validate(operand)?;
        Ok(self.apply(operand))
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses the whole input as one decimal literal.
///
/// Surrounding spaces are ignored. A leading sign, a fraction and a decimal
/// exponent are accepted; operators, parentheses, and the textual forms `inf`
/// and `NaN` are not.
///
/// # Errors
/// Returns `DomainError::InvalidLiteral` for anything else, including empty
/// input.
///
/// # Example
/// ```
/// use calcpad::interpreter::function::parse_literal;
///
/// assert_eq!(parse_literal(" -2.5 "), Ok(-2.5));
/// assert!(parse_literal("2+2").is_err());
/// assert!(parse_literal("inf").is_err());
/// ```
pub fn parse_literal(literal: &str) -> Result<f64, DomainError> {
    let trimmed = literal.trim_matches(' ');
    let invalid = || DomainError::InvalidLiteral { literal: literal.to_string() };

    if !trimmed.bytes()
               .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
    {
        return Err(invalid());
    }

    trimmed.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12,
                "expected {expected}, got {actual}");
    }

    #[test]
    fn labels_round_trip() {
        for f in UnaryFunction::ALL {
            assert_eq!(UnaryFunction::from_label(f.label()), Some(f));
        }
    }

    #[test]
    fn square_root() {
        assert_eq!(UnaryFunction::SquareRoot.evaluate("16"), Ok(4.0));
        assert_eq!(UnaryFunction::SquareRoot.evaluate("0"), Ok(0.0));
        assert_eq!(UnaryFunction::SquareRoot.evaluate("-4"),
                   Err(DomainError::NegativeSquareRoot));
    }

    #[test]
    fn square_and_reciprocal() {
        assert_eq!(UnaryFunction::Square.evaluate("-3"), Ok(9.0));
        assert_eq!(UnaryFunction::Reciprocal.evaluate("4"), Ok(0.25));
        assert_eq!(UnaryFunction::Reciprocal.evaluate("0"), Err(DomainError::ZeroReciprocal));
        assert_eq!(UnaryFunction::Reciprocal.evaluate("-0.0"),
                   Err(DomainError::ZeroReciprocal));
    }

    #[test]
    fn trigonometry_uses_degrees() {
        assert_eq!(UnaryFunction::Cosine.evaluate("0"), Ok(1.0));
        assert_close(UnaryFunction::Sine.evaluate("30").unwrap(), 0.5);
        assert_close(UnaryFunction::Sine.evaluate("90").unwrap(), 1.0);
        assert_close(UnaryFunction::Cosine.evaluate("180").unwrap(), -1.0);
        assert_close(UnaryFunction::Tangent.evaluate("45").unwrap(), 1.0);
    }

    #[test]
    fn literal_must_be_a_single_number() {
        for bad in ["", "   ", "2+2", "(3)", "abc", "1 2", "nan", "-inf", "1..2", "--1"] {
            assert_eq!(UnaryFunction::Square.evaluate(bad),
                       Err(DomainError::InvalidLiteral { literal: bad.to_string() }),
                       "{bad:?} should be rejected");
        }
    }

    #[test]
    fn literal_forms() {
        assert_eq!(parse_literal("42"), Ok(42.0));
        assert_eq!(parse_literal(".5"), Ok(0.5));
        assert_eq!(parse_literal("+7"), Ok(7.0));
        assert_eq!(parse_literal("1e3"), Ok(1000.0));
    }
}
