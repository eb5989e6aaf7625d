use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            operator::BinaryOperator,
        },
        value::{array::Array, dimensions::Dimensions},
    },
    util::num::i64_to_f64,
};

/// A runtime value.
///
/// Scalars are held inline. Arrays sit behind an `Rc`, so cloning a `Value`
/// is always cheap and never copies array contents.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Array(Rc<Array>),
}

impl Value {
    /// Shape of the value. Scalars have rank 0.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::Array(array) => array.dimensions().clone(),
            Self::Integer(_) | Self::Real(_) => Dimensions::scalar(),
        }
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        match self {
            Self::Array(array) => array.rank(),
            Self::Integer(_) | Self::Real(_) => 0,
        }
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// View depth of an array value; `0` for scalars.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Array(array) => array.depth(),
            Self::Integer(_) | Self::Real(_) => 0,
        }
    }

    /// Adds two values, with the same rules as the `+` function.
    ///
    /// # Example
    /// ```
    /// use glyphic::interpreter::value::core::Value;
    ///
    /// let sum = Value::Integer(2).add(&Value::Real(0.5), 1).unwrap();
    /// assert_eq!(sum.formatted(1).unwrap(), "2.5");
    /// ```
    pub fn add(&self, other: &Self, line: usize) -> EvalResult<Self> {
        Engine::eval_binary(BinaryOperator::Add, self, other, line)
    }

    /// Returns the value as an integer.
    ///
    /// A real is accepted when it has no fractional part.
    ///
    /// # Errors
    /// Returns `TypeError` for arrays and fractional reals.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            #[allow(clippy::cast_possible_truncation)]
            Self::Real(r) if r.fract() == 0.0 && r.abs() < 9.2e18 => Ok(*r as i64),
            other => Err(RuntimeError::TypeError { details: format!("Expected an integer, found {}",
                                                                    other.kind()),
                                                   line }),
        }
    }

    /// Returns the value as a real number, converting integers.
    ///
    /// # Errors
    /// Returns `TypeError` for arrays.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::Real(r) => Ok(*r),
            Self::Array(_) => Err(RuntimeError::TypeError { details: format!("Expected a number, found {}",
                                                                             self.kind()),
                                                            line }),
        }
    }

    /// Replaces any array view with stored values, so later reads do not
    /// recompute the elements.
    ///
    /// # Errors
    /// Propagates the first error raised while computing an element.
    pub fn collapse(&self, line: usize) -> EvalResult<Self> {
        match self {
            Self::Array(array) => Ok(Self::Array(Rc::new(array.collapse(line)?))),
            Self::Integer(_) | Self::Real(_) => Ok(self.clone()),
        }
    }

    pub(crate) fn kind(&self) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::Real(r) => format!("real {r:?}"),
            Self::Array(array) => format!("array of shape ({})", array.dimensions()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::Array(Rc::new(array))
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::from(Array::vector(values))
    }
}
