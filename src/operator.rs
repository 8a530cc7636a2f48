/// Represents a binary operator.
///
/// Binary operators are the four basic arithmetic operations plus
/// exponentiation. All of them work on `f64` and follow IEEE-754: dividing by
/// zero yields infinity or NaN rather than an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Applies the operator to two operands.
    ///
    /// # Example
    /// ```
    /// use calcpad::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(2.0, 3.0), -1.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 9.0), 512.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

/// Represents a unary sign operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl UnaryOperator {
    /// Applies the sign to an operand.
    #[must_use]
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            Self::Plus => operand,
            Self::Negate => -operand,
        }
    }
}
