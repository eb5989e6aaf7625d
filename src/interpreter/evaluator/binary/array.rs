use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            operator::BinaryOperator,
        },
        value::{array::Array, core::Value},
    },
};

impl Engine {
    /// Builds the elementwise view `left op right` for two arrays.
    ///
    /// No element is computed here. Both operands are shared with the view.
    ///
    /// # Errors
    /// - `RankMismatch` if the arrays have different ranks.
    /// - `ShapeMismatch` if the ranks agree but an axis differs.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use glyphic::interpreter::{
    ///     evaluator::{core::Engine, operator::BinaryOperator},
    ///     value::{array::Array, core::Value},
    /// };
    ///
    /// let a = Rc::new(Array::vector(vec![Value::Integer(1), Value::Integer(2)]));
    /// let b = Rc::new(Array::vector(vec![Value::Integer(3), Value::Integer(4)]));
    ///
    /// let sum = Engine::eval_array_array(BinaryOperator::Add, &a, &b, 1).unwrap();
    /// assert_eq!(sum.formatted(1).unwrap(), "4 6");
    /// ```
    pub fn eval_array_array(op: BinaryOperator,
                            left: &Rc<Array>,
                            right: &Rc<Array>,
                            line: usize)
                            -> EvalResult<Value> {
        if left.rank() != right.rank() {
            return Err(RuntimeError::RankMismatch { left: left.rank(),
                                                    right: right.rank(),
                                                    line });
        }
        if left.dimensions() != right.dimensions() {
            return Err(RuntimeError::ShapeMismatch { left: left.dimensions().to_string(),
                                                     right: right.dimensions().to_string(),
                                                     line });
        }

        Ok(Array::binary(op, Rc::clone(left), Rc::clone(right), line).into())
    }

    /// Builds the view `array op scalar`, extending the scalar to the shape
    /// of the array.
    pub fn eval_array_scalar(op: BinaryOperator,
                             array: &Rc<Array>,
                             scalar: &Value,
                             line: usize)
                             -> EvalResult<Value> {
        let fill = Rc::new(Array::constant(array.dimensions().clone(), scalar.clone()));
        Ok(Array::binary(op, Rc::clone(array), fill, line).into())
    }

    /// Builds the view `scalar op array`. Operand order is kept, so
    /// `10 - 1 2` is `9 8`.
    pub fn eval_scalar_array(op: BinaryOperator,
                             scalar: &Value,
                             array: &Rc<Array>,
                             line: usize)
                             -> EvalResult<Value> {
        let fill = Rc::new(Array::constant(array.dimensions().clone(), scalar.clone()));
        Ok(Array::binary(op, fill, Rc::clone(array), line).into())
    }
}
