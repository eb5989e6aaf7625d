use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            operator::{BinaryOperator, UnaryOperator},
        },
        value::{array::Array, core::Value},
    },
};

impl Engine {
    /// Evaluates a monadic scalar function on a value.
    ///
    /// Supported operators:
    /// - `Conjugate`: identity on real numbers.
    /// - `Negate`: numeric negation. Negating the smallest integer overflows.
    /// - `Direction`: `¯1`, `0` or `1` as an integer, for either category.
    /// - `Reciprocal`: `1 ÷ x`, following the division rules.
    ///
    /// Arrays produce a lazy view that applies the operator per element.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use glyphic::interpreter::{
    ///     evaluator::{core::Engine, operator::UnaryOperator},
    ///     value::core::Value,
    /// };
    ///
    /// let v = Engine::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v.formatted(1).unwrap(), "-5");
    ///
    /// let v = Engine::eval_unary(UnaryOperator::Reciprocal, &Value::Integer(4), 1).unwrap();
    /// assert_eq!(v.formatted(1).unwrap(), "0.25");
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match value {
            Value::Array(array) => Ok(Array::unary(op, Rc::clone(array), line).into()),
            Value::Integer(n) => match op {
                UnaryOperator::Conjugate => Ok(Value::Integer(*n)),
                UnaryOperator::Negate => {
                    n.checked_neg()
                     .map(Value::Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                UnaryOperator::Direction => Ok(Value::Integer(n.signum())),
                UnaryOperator::Reciprocal => {
                    Self::eval_scalar_op(BinaryOperator::Div, &Value::Integer(1), value, line)
                },
            },
            Value::Real(r) => match op {
                UnaryOperator::Conjugate => Ok(Value::Real(*r)),
                UnaryOperator::Negate => Ok(Value::Real(-r)),
                UnaryOperator::Direction => {
                    let sign = if *r > 0.0 {
                        1
                    } else if *r < 0.0 {
                        -1
                    } else {
                        0
                    };
                    Ok(Value::Integer(sign))
                },
                UnaryOperator::Reciprocal => {
                    Self::eval_scalar_op(BinaryOperator::Div, &Value::Integer(1), value, line)
                },
            },
        }
    }
}
