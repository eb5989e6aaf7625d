use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Engine},
        operator::BinaryOperator,
    },
    value::core::Value,
};

impl Engine {
    /// Applies a dyadic scalar function to two values.
    ///
    /// Two scalars are combined immediately. As soon as one side is an array
    /// the result is a lazy view: array with array pairs elements by
    /// position, and a scalar on either side is extended to the shape of the
    /// array.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The combined value. For arrays, element errors surface later, when
    /// the element is read.
    ///
    /// # Example
    /// ```
    /// use glyphic::interpreter::{
    ///     evaluator::{core::Engine, operator::BinaryOperator},
    ///     value::core::Value,
    /// };
    ///
    /// let left = Value::Integer(7);
    /// let right = Value::Integer(2);
    ///
    /// let result = Engine::eval_binary(BinaryOperator::Div, &left, &right, 1).unwrap();
    /// assert_eq!(result.formatted(1).unwrap(), "3.5");
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Array(a), Value::Array(b)) => Self::eval_array_array(op, a, b, line),
            (Value::Array(a), b) => Self::eval_array_scalar(op, a, b, line),
            (a, Value::Array(b)) => Self::eval_scalar_array(op, a, b, line),
            _ => Self::eval_scalar_op(op, left, right, line),
        }
    }
}
