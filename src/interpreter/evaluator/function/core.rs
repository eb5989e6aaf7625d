use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Engine},
            function::{arithmetic::ArithmeticFunction, iota::Iota, print::Print, rho::Rho},
            operator::{BinaryOperator, UnaryOperator},
        },
        symbol::Symbol,
        value::core::Value,
    },
};

/// A callable bound to a symbol.
///
/// Every function may be called monadically (`f x`) or dyadically
/// (`x f y`). The default implementations reject the call, so a function
/// only overrides the arities it supports.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use glyphic::interpreter::{
///     evaluator::{core::{Engine, EvalResult}, function::core::Function},
///     value::core::Value,
/// };
///
/// struct Double;
///
/// impl Function for Double {
///     fn name(&self) -> &str {
///         "double"
///     }
///
///     fn eval_1arg(&self, _: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
///         arg.add(&arg, line)
///     }
/// }
///
/// let mut engine = Engine::new();
/// let symbol = engine.intern_symbol("double");
/// engine.register_function(symbol, Rc::new(Double));
///
/// let value = engine.eval_string("double 1 2 3").unwrap();
/// assert_eq!(value.formatted(1).unwrap(), "2 4 6");
/// ```
pub trait Function {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Monadic call `f arg`.
    ///
    /// # Errors
    /// `UnsupportedArity` unless overridden.
    fn eval_1arg(&self, engine: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
        let _ = (engine, arg);
        Err(RuntimeError::UnsupportedArity { name: self.name().to_string(),
                                             arity: 1,
                                             line })
    }

    /// Dyadic call `left f right`.
    ///
    /// # Errors
    /// `UnsupportedArity` unless overridden.
    fn eval_2arg(&self,
                 engine: &mut Engine,
                 left: Value,
                 right: Value,
                 line: usize)
                 -> EvalResult<Value> {
        let _ = (engine, left, right);
        Err(RuntimeError::UnsupportedArity { name: self.name().to_string(),
                                             arity: 2,
                                             line })
    }
}

/// A resolved function reference stored in the instruction tree.
///
/// The parser resolves function symbols once, so later rebinding a symbol
/// does not change instructions that were already parsed.
#[derive(Clone)]
pub struct FunctionRef {
    symbol:   Symbol,
    function: Rc<dyn Function>,
}

impl FunctionRef {
    #[must_use]
    pub fn new(symbol: Symbol, function: Rc<dyn Function>) -> Self {
        Self { symbol, function }
    }

    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Calls the function monadically.
    ///
    /// # Errors
    /// Whatever the function reports.
    pub fn eval_1arg(&self, engine: &mut Engine, arg: Value, line: usize) -> EvalResult<Value> {
        self.function.eval_1arg(engine, arg, line)
    }

    /// Calls the function dyadically.
    ///
    /// # Errors
    /// Whatever the function reports.
    pub fn eval_2arg(&self,
                     engine: &mut Engine,
                     left: Value,
                     right: Value,
                     line: usize)
                     -> EvalResult<Value> {
        self.function.eval_2arg(engine, left, right, line)
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
        && std::ptr::addr_eq(Rc::as_ptr(&self.function), Rc::as_ptr(&other.function))
    }
}

impl std::fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function[{}]", self.symbol.name())
    }
}

/// Defines the builtin functions by generating the registration routine and
/// a name list.
///
/// Each entry maps the symbol name to an expression constructing the
/// function object.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $function:expr
        ),* $(,)?
    ) => {
        /// Names of every builtin, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        /// Binds every builtin in `engine`.
        pub(crate) fn register_builtins(engine: &mut Engine) {
            $(
                let symbol = engine.intern_symbol($name);
                engine.register_function(symbol, Rc::new($function));
            )*
        }
    };
}

builtin_functions! {
    "+"     => ArithmeticFunction::new(UnaryOperator::Conjugate, BinaryOperator::Add),
    "-"     => ArithmeticFunction::new(UnaryOperator::Negate, BinaryOperator::Sub),
    "×"     => ArithmeticFunction::new(UnaryOperator::Direction, BinaryOperator::Mul),
    "÷"     => ArithmeticFunction::new(UnaryOperator::Reciprocal, BinaryOperator::Div),
    "⍳"     => Iota,
    "⍴"     => Rho,
    "print" => Print,
}
