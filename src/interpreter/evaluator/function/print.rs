use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Engine},
        function::core::Function,
    },
    value::core::Value,
};

/// Writes a value to the engine's output sink and returns it unchanged.
///
/// Only the monadic form exists.
///
/// # Example
/// ```
/// use glyphic::interpreter::evaluator::{core::Engine, function::output::SharedBuffer};
///
/// let buffer = SharedBuffer::default();
/// let mut engine = Engine::new().with_output(buffer.clone());
///
/// let value = engine.eval_string("print 1 2 3").unwrap();
///
/// assert_eq!(buffer.lines(), vec!["1 2 3".to_string()]);
/// assert_eq!(value.formatted(1).unwrap(), "1 2 3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Print;

impl Function for Print {
    fn name(&self) -> &str {
        "print"
    }

    fn eval_1arg(&self, engine: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
        let text = arg.formatted(line)?;
        engine.output_mut().write_formatted(&text);
        Ok(arg)
    }
}
