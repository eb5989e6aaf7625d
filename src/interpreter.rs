/// The evaluator module executes instruction trees and computes results.
///
/// The evaluator walks the tree produced by the parser, calls the functions
/// bound to symbols, manages variable state and produces values. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Owns the interpreter state in `Engine`.
/// - Implements the builtin functions and the arithmetic on scalars and
///   arrays.
/// - Reports runtime errors such as division by zero or mismatched shapes.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The tokenizer reads the raw source text and produces a stream of tokens:
/// numbers, symbols, parentheses, the statement separator and the assignment
/// arrow. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, tracking the line.
/// - Interns names and function glyphs as symbols.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds instruction trees from tokens.
///
/// The parser reads right to left by recursion: a function takes everything
/// to its right as its right operand and the values to its left as its left
/// operand.
///
/// # Responsibilities
/// - Converts tokens into `Instruction` trees.
/// - Resolves function symbols against the engine.
/// - Validates the grammar, reporting errors with line info.
pub mod parser;
/// Symbols and the symbol table.
///
/// Every name is interned once, so symbols compare by identity.
pub mod symbol;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares integers, reals and n-dimensional arrays, including
/// the lazy array views produced by arithmetic, `⍳` and `⍴`.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Array` type.
/// - Implements shape handling, element access and materialization.
/// - Formats values for output.
pub mod value;
