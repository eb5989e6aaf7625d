#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// A codepoint that starts no token was found in the input.
    UnrecognizedSymbol {
        /// The offending codepoint.
        symbol: char,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric literal was malformed, e.g. `12a` or a lone `¯`.
    MalformedNumber {
        /// What was wrong with the literal.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token at a position where the grammar does not allow it.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but the input ended.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement or parenthesised group contained no value.
    EmptyStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input nests deeper than the configured maximum.
    NestingTooDeep {
        /// The configured maximum depth.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSymbol { symbol, line } => write!(f,
                                                                "Error on line {line}: Unrecognized symbol '{symbol}' (U+{:04X}).",
                                                                u32::from(*symbol)),
            Self::MalformedNumber { details, line } => {
                write!(f, "Error on line {line}: Malformed number: {details}.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),
            Self::EmptyStatement { line } => {
                write!(f, "Error on line {line}: Statement has no value.")
            },
            Self::NestingTooDeep { max, line } => write!(f,
                                                         "Error on line {line}: Expression nests deeper than the maximum of {max}."),
        }
    }
}

impl std::error::Error for ParseError {}
