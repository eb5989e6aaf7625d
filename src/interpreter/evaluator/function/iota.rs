use crate::{
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            function::core::Function,
        },
        value::{array::Array, core::Value},
    },
    util::num::i64_to_usize_checked,
};

/// `⍳ n`: the index vector `0 1 … n-1`.
///
/// The result is a view; no elements are stored.
///
/// # Example
/// ```
/// use glyphic::interpreter::evaluator::core::Engine;
///
/// let mut engine = Engine::new();
/// let value = engine.eval_string("⍳ 5").unwrap();
///
/// assert_eq!(value.formatted(1).unwrap(), "0 1 2 3 4");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Iota;

impl Function for Iota {
    fn name(&self) -> &str {
        "⍳"
    }

    fn eval_1arg(&self, _: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
        let length = i64_to_usize_checked(arg.as_integer(line)?, line)?;
        Ok(Array::iota(length).into())
    }
}
