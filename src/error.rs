/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing source
/// code: unrecognized codepoints, malformed numeric literals, tokens in
/// positions the grammar does not allow, and over-deep nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// variables, incompatible operand types, rank and shape mismatches, index
/// failures, overflow and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Either kind of failure, for entry points that parse and evaluate in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    Parse(ParseError),
    /// The parsed program failed while evaluating.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
