#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced a variable that has no binding.
    UnboundVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operands had incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An elementwise operation was applied to arrays of different rank.
    RankMismatch {
        /// Rank of the left operand.
        left:  usize,
        /// Rank of the right operand.
        right: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An elementwise operation was applied to arrays of equal rank but
    /// different dimensions.
    ShapeMismatch {
        /// Dimensions of the left operand.
        left:  String,
        /// Dimensions of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to access an array element outside the declared bounds.
    IndexOutOfBounds {
        /// The largest valid index.
        max:   usize,
        /// The index that was actually requested.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A position had a different number of coordinates than the array has
    /// axes.
    IndexRankMismatch {
        /// The rank of the array.
        expected: usize,
        /// The number of coordinates supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function was called with an arity it does not implement.
    UnsupportedArity {
        /// The name of the function.
        name:  String,
        /// The number of arguments it was called with.
        arity: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Formatting is not defined for arrays of this rank.
    UnsupportedRank {
        /// The rank of the array.
        rank: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, line } => {
                write!(f, "Error on line {line}: Variable not assigned: '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::RankMismatch { left, right, line } => write!(f,
                                                               "Error on line {line}: Arrays are of different rank: {left} vs {right}."),
            Self::ShapeMismatch { left, right, line } => write!(f,
                                                                "Error on line {line}: Arrays are of different shape: [{left}] vs [{right}]."),
            Self::IndexOutOfBounds { max, found, line } => write!(f,
                                                                  "Error on line {line}: Index out of bounds. Maximum is {max}, but found {found} instead."),
            Self::IndexRankMismatch { expected,
                                      found,
                                      line, } => write!(f,
                                                        "Error on line {line}: Incorrect rank. Got {found}, expected {expected}."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::UnsupportedArity { name, arity, line } => write!(f,
                                                                   "Error on line {line}: Function '{name}' cannot be called with {arity} argument(s)."),
            Self::UnsupportedRank { rank, line } => write!(f,
                                                           "Error on line {line}: Cannot format an array of rank {rank}."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
