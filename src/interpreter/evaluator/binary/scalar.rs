use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            operator::BinaryOperator,
        },
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Engine {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers produce an integer, with overflow reported instead of
    /// wrapping. If either side is real both are promoted and the result is
    /// real. Integer division stays integral only when it is exact; `7 ÷ 2`
    /// is `3.5`. Division by zero fails for both categories.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use glyphic::interpreter::{
    ///     evaluator::{core::Engine, operator::BinaryOperator},
    ///     value::core::Value,
    /// };
    ///
    /// let x = Value::Real(1.5);
    /// let y = Value::Integer(2);
    ///
    /// let result = Engine::eval_scalar_op(BinaryOperator::Mul, &x, &y, 1).unwrap();
    /// assert_eq!(result.formatted(1).unwrap(), "3.0");
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => return Self::eval_integer_division(*a, *b, line),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                left / right
                            },
                        }))
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("Invalid scalar operands: {} {op} {}",
                                                               left.kind(),
                                                               right.kind()),
                                              line })
            },
        }
    }

    fn eval_integer_division(a: i64, b: i64, line: usize) -> EvalResult<Value> {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        match (a.checked_rem(b), a.checked_div(b)) {
            (Some(0), Some(quotient)) => Ok(Value::Integer(quotient)),
            (Some(_), _) => Ok(Value::Real(i64_to_f64(a) / i64_to_f64(b))),
            _ => Err(RuntimeError::Overflow { line }),
        }
    }
}
