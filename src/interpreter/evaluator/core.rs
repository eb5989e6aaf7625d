use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    config::Config,
    error::{Error, RuntimeError},
    instruction::Instruction,
    interpreter::{
        evaluator::{
            function::{
                core::{Function, FunctionRef, register_builtins},
                output::{OutputSink, StdoutSink},
            },
        },
        lexer::{Token, Tokenizer},
        parser::core::{ParseResult, parse_value_toplevel},
        symbol::{Symbol, SymbolTable},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The interpreter state.
///
/// An `Engine` owns the symbol table, the functions bound to symbols, the
/// global variables and the sink that `print` writes to. It is created once
/// and reused for every statement of a session, so variables assigned by one
/// statement are visible to the next.
///
/// # Example
/// ```
/// use glyphic::interpreter::evaluator::core::Engine;
///
/// let mut engine = Engine::new();
/// let value = engine.eval_string("a ← 1 2 3 ⋄ a + 10").unwrap();
///
/// assert_eq!(value.formatted(1).unwrap(), "11 12 13");
/// ```
pub struct Engine {
    symbols:   SymbolTable,
    functions: HashMap<Symbol, Rc<dyn Function>>,
    variables: HashMap<Symbol, Value>,
    output:    Box<dyn OutputSink>,
    config:    Config,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the default configuration, the builtin
    /// functions registered, and `print` writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let mut engine = Self { symbols: SymbolTable::default(),
                                functions: HashMap::new(),
                                variables: HashMap::new(),
                                output: Box::new(StdoutSink),
                                config };
        register_builtins(&mut engine);
        engine
    }

    /// Replaces the sink that `print` and auto-printing write to.
    #[must_use]
    pub fn with_output(mut self, output: impl OutputSink + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub(crate) fn output_mut(&mut self) -> &mut dyn OutputSink {
        self.output.as_mut()
    }

    /// Returns the unique symbol for `name`, creating it on first use.
    pub fn intern_symbol(&mut self, name: &str) -> Symbol {
        self.symbols.intern(name)
    }

    /// Binds `function` to `symbol`, replacing any previous binding.
    ///
    /// Only symbols bound before a statement is parsed are treated as
    /// functions while parsing it.
    pub fn register_function(&mut self, symbol: Symbol, function: Rc<dyn Function>) {
        debug!("Registering function {} as '{}'", function.name(), symbol.name());
        self.functions.insert(symbol, function);
    }

    /// Looks up the function bound to `symbol`.
    #[must_use]
    pub fn function(&self, symbol: &Symbol) -> Option<FunctionRef> {
        self.functions
            .get(symbol)
            .map(|function| FunctionRef::new(symbol.clone(), Rc::clone(function)))
    }

    /// Returns the value currently assigned to `symbol`.
    #[must_use]
    pub fn lookup_var(&self, symbol: &Symbol) -> Option<&Value> {
        self.variables.get(symbol)
    }

    /// Assigns `value` to `symbol`, replacing any previous value.
    pub fn assign_var(&mut self, symbol: Symbol, value: Value) {
        debug!("Assigning '{}'", symbol.name());
        self.variables.insert(symbol, value);
    }

    /// Parses a complete program starting at line 1.
    ///
    /// # Errors
    /// Returns a `ParseError` for malformed input.
    pub fn parse_string(&mut self, source: &str) -> ParseResult<Instruction> {
        self.parse_line(source, 1)
    }

    /// Parses a program whose first line has the given number.
    ///
    /// # Errors
    /// Returns a `ParseError` for malformed input.
    pub fn parse_line(&mut self, source: &str, line: usize) -> ParseResult<Instruction> {
        let mut tokenizer = Tokenizer::starting_at_line(source, line);
        let instruction = parse_value_toplevel(self, &mut tokenizer, &Token::EndOfFile, 0)?;
        debug!("Parsed line {line}: {instruction:?}");
        Ok(instruction)
    }

    /// Evaluates an instruction tree and returns its value.
    ///
    /// Function arguments are evaluated left operand first, then right
    /// operand, and the elements of a literal vector from left to right.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised during evaluation.
    pub fn eval(&mut self, instruction: &Instruction) -> EvalResult<Value> {
        match instruction {
            Instruction::InstructionList { instructions, line } => {
                self.eval_instruction_list(instructions, *line)
            },
            Instruction::FunctionCall1Arg { function, right, line } => {
                let arg = self.eval(right)?;
                function.eval_1arg(self, arg, *line)
            },
            Instruction::FunctionCall2Arg { function,
                                            left,
                                            right,
                                            line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                function.eval_2arg(self, left, right, *line)
            },
            Instruction::VariableRef { symbol, line } => {
                self.lookup_var(symbol)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnboundVariable { name: symbol.name().to_string(),
                                                                   line: *line, })
            },
            Instruction::Assignment { symbol, value, line } => {
                let value = self.eval(value)?;
                let value = if value.depth() > self.config.max_depth {
                    value.collapse(*line)?
                } else {
                    value
                };
                self.assign_var(symbol.clone(), value.clone());
                Ok(value)
            },
            Instruction::Literal1DArray { elements } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Instruction::LiteralScalarValue { value } => self.eval(value),
            Instruction::LiteralNumber { value } => Ok(Value::Integer(*value)),
        }
    }

    /// Evaluates each statement in order and returns the value of the last.
    ///
    /// The parser never builds an empty list; one constructed by hand fails
    /// with `InvalidArgument`.
    fn eval_instruction_list(&mut self, instructions: &[Instruction], line: usize) -> EvalResult<Value> {
        let mut result = None;
        for instruction in instructions {
            result = Some(self.eval(instruction)?);
        }
        result.ok_or_else(|| RuntimeError::InvalidArgument { details: "Empty instruction list".to_string(),
                                                             line })
    }

    /// Parses and evaluates a complete program.
    ///
    /// # Errors
    /// Returns `Error::Parse` or `Error::Runtime` depending on which stage
    /// failed.
    pub fn eval_string(&mut self, source: &str) -> Result<Value, Error> {
        let instruction = self.parse_string(source)?;
        Ok(self.eval(&instruction)?)
    }
}
