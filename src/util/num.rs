use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widens an `i64` to `f64` for mixed integer/float arithmetic.
///
/// Integers beyond `2^53` round to the nearest representable float, which is
/// the precision the float operand already has.
///
/// ## Example
/// ```
/// use glyphic::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
/// Converts an `i64` to a `usize` for use as a count, dimension or index.
///
/// ## Errors
/// Returns `InvalidArgument` if the value is negative and `Overflow` if it
/// exceeds the platform's `usize`.
///
/// ## Parameters
/// - `value`: The integer value to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use glyphic::{error::RuntimeError, util::num::i64_to_usize_checked};
///
/// assert_eq!(i64_to_usize_checked(42, 1).unwrap(), 42);
///
/// let err = i64_to_usize_checked(-1, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { line: 5, .. }));
/// ```
pub fn i64_to_usize_checked(value: i64, line: usize) -> EvalResult<usize> {
    if value < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("expected a non-negative integer, found {value}"),
                                                   line });
    }

    usize::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
/// Converts a `usize` to an `i64` so counts and dimensions can be returned as
/// integer values.
///
/// ## Errors
/// Returns `Overflow` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use glyphic::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(7, 1).unwrap(), 7);
/// ```
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
