use crate::interpreter::{evaluator::function::core::FunctionRef, symbol::Symbol};

/// A node of the executable instruction tree built by the parser.
///
/// There is no separate syntax tree: the parser resolves function symbols
/// against the engine while it reads, so every `Instruction` is ready to be
/// evaluated. Each node owns its children; the tree has no sharing and no
/// cycles, and evaluation only reads it, so one tree can be evaluated any
/// number of times.
///
/// # Example
/// ```
/// use glyphic::{instruction::Instruction, interpreter::evaluator::core::Engine};
///
/// let mut engine = Engine::new();
/// let tree = engine.parse_string("1 2 3").unwrap();
///
/// assert_eq!(tree,
///            Instruction::Literal1DArray { elements: vec![Instruction::LiteralNumber { value: 1 },
///                                                         Instruction::LiteralNumber { value: 2 },
///                                                         Instruction::LiteralNumber { value: 3 },] });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Statements separated by `⋄`, evaluated in order. The value of the list
    /// is the value of its last statement.
    InstructionList {
        /// The statements, in source order.
        instructions: Vec<Self>,
        /// Line number in the source code.
        line:         usize,
    },
    /// Monadic application: a function with only a right operand.
    FunctionCall1Arg {
        /// The function, resolved at parse time.
        function: FunctionRef,
        /// The operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Dyadic application: a function with left and right operands.
    FunctionCall2Arg {
        /// The function, resolved at parse time.
        function: FunctionRef,
        /// The left operand.
        left:     Box<Self>,
        /// The right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Reference to a variable by symbol.
    VariableRef {
        /// The variable.
        symbol: Symbol,
        /// Line number in the source code.
        line:   usize,
    },
    /// `name ← value`; evaluates to the assigned value.
    Assignment {
        /// The variable being bound.
        symbol: Symbol,
        /// The value to bind.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Adjacent values with no function between them, forming a vector.
    Literal1DArray {
        /// One instruction per element.
        elements: Vec<Self>,
    },
    /// A single value standing on its own.
    LiteralScalarValue {
        /// The wrapped instruction.
        value: Box<Self>,
    },
    /// An integer literal.
    LiteralNumber {
        /// The literal's value.
        value: i64,
    },
}
