use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Engine},
        function::core::Function,
        operator::{BinaryOperator, UnaryOperator},
    },
    value::core::Value,
};

/// One of the four arithmetic glyphs: a monadic scalar function paired with
/// a dyadic one.
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticFunction {
    monadic: UnaryOperator,
    dyadic:  BinaryOperator,
}

impl ArithmeticFunction {
    #[must_use]
    pub const fn new(monadic: UnaryOperator, dyadic: BinaryOperator) -> Self {
        Self { monadic, dyadic }
    }
}

impl Function for ArithmeticFunction {
    fn name(&self) -> &str {
        self.dyadic.glyph()
    }

    fn eval_1arg(&self, _: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
        Engine::eval_unary(self.monadic, &arg, line)
    }

    fn eval_2arg(&self, _: &mut Engine, left: Value, right: Value, line: usize) -> EvalResult<Value> {
        Engine::eval_binary(self.dyadic, &left, &right, line)
    }
}
