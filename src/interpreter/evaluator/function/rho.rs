use crate::{
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            function::core::Function,
        },
        value::{array::Array, core::Value, dimensions::Dimensions},
    },
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
};

/// `⍴ x` returns the shape of `x`; `shape ⍴ x` reshapes `x`.
///
/// Reshaping fills the new shape with the elements of `x` in row-major order,
/// starting over from the first element when they run out. A scalar `x`
/// fills every position.
///
/// # Example
/// ```
/// use glyphic::interpreter::evaluator::core::Engine;
///
/// let mut engine = Engine::new();
///
/// let value = engine.eval_string("2 3 ⍴ 1 2").unwrap();
/// assert_eq!(value.formatted(1).unwrap(), "1 2 1\n2 1 2");
///
/// let value = engine.eval_string("⍴ 2 3 ⍴ 0").unwrap();
/// assert_eq!(value.formatted(1).unwrap(), "2 3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rho;

impl Function for Rho {
    fn name(&self) -> &str {
        "⍴"
    }

    fn eval_1arg(&self, _: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
        let axes = arg.dimensions()
                      .axes()
                      .iter()
                      .map(|&axis| usize_to_i64_checked(axis, line).map(Value::Integer))
                      .collect::<EvalResult<Vec<_>>>()?;

        Ok(Value::from(axes))
    }

    fn eval_2arg(&self, _: &mut Engine, left: Value, right: Value, line: usize) -> EvalResult<Value> {
        let dimensions = dimensions_from_value(&left, line)?;

        match right {
            Value::Array(source) => Ok(Array::cyclic(dimensions, source, line)?.into()),
            scalar => Ok(Array::constant(dimensions, scalar).into()),
        }
    }
}

/// Reads a shape from a scalar (a vector length) or from a vector of axis
/// sizes.
fn dimensions_from_value(value: &Value, line: usize) -> EvalResult<Dimensions> {
    let axes = match value {
        Value::Array(array) => {
            let mut axes = Vec::with_capacity(array.size());
            for index in 0..array.size() {
                let axis = array.value_at(index, line)?.as_integer(line)?;
                axes.push(i64_to_usize_checked(axis, line)?);
            }
            axes
        },
        scalar => vec![i64_to_usize_checked(scalar.as_integer(line)?, line)?],
    };

    Dimensions::new(axes, line)
}
