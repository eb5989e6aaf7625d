/// Scalar functions of two arguments, applied elementwise to arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `×`
    Mul,
    /// `÷`
    Div,
}

/// Scalar functions of one argument, applied elementwise to arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Monadic `+`. Without complex numbers this is the identity.
    Conjugate,
    /// Monadic `-`.
    Negate,
    /// Monadic `×`: the sign of the argument as `¯1`, `0` or `1`.
    Direction,
    /// Monadic `÷`: `1 ÷ x`.
    Reciprocal,
}

impl BinaryOperator {
    /// The glyph this operator is bound to.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Conjugate => "conjugate",
            Self::Negate => "negate",
            Self::Direction => "direction",
            Self::Reciprocal => "reciprocal",
        };
        f.write_str(name)
    }
}
