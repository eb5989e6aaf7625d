//! # glyphic
//!
//! glyphic is the evaluation core of an APL-family array language written in
//! Rust. It tokenizes glyph-based source text, parses it right to left into an
//! instruction tree, and evaluates it over integers, reals and n-dimensional
//! arrays, where arithmetic on arrays produces lazy views.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::Error,
    interpreter::{evaluator::core::Engine, value::core::Value},
    util::charset::is_whitespace,
};

/// Engine settings.
///
/// Defines `Config`, which carries the nesting limit and the auto-print
/// switch used by the script runner and the command line.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing, or evaluating code. Every error carries the line it occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Defines the executable instruction tree.
///
/// The parser produces `Instruction` trees and the engine evaluates them.
/// Function symbols are already resolved in the tree.
pub mod instruction;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenizing, parsing, evaluation and the value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Character classification used by the tokenizer and checked numeric
/// conversions used by the evaluator.
pub mod util;

/// Parses and evaluates one line of source against `engine`.
///
/// Blank lines and lines holding only a comment produce no value.
///
/// # Example
/// ```
/// use glyphic::{eval_line, interpreter::evaluator::core::Engine};
///
/// let mut engine = Engine::new();
///
/// assert!(eval_line(&mut engine, "   ⍝ nothing here", 1).unwrap().is_none());
///
/// let value = eval_line(&mut engine, "3 × 1 2", 2).unwrap().unwrap();
/// assert_eq!(value.formatted(2).unwrap(), "3 6");
/// ```
pub fn eval_line(engine: &mut Engine, source: &str, line: usize) -> Result<Option<Value>, Error> {
    let content = source.trim_start_matches(is_whitespace);
    if content.is_empty() || content.starts_with('⍝') {
        return Ok(None);
    }

    let instruction = engine.parse_line(source, line)?;
    Ok(Some(engine.eval(&instruction)?))
}

/// Runs every line of `source` as its own program against one engine.
///
/// Variables assigned on one line are visible on the following lines.
///
/// # Returns
/// The value of the last line that produced one, with its line number.
pub fn run_script(engine: &mut Engine, source: &str) -> Result<Option<(usize, Value)>, Error> {
    let mut result = None;

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(value) = eval_line(engine, text, line)? {
            result = Some((line, value));
        }
    }

    Ok(result)
}

/// Runs a script and optionally prints its final value.
///
/// This function evaluates all lines of the provided source with a fresh
/// engine. If execution succeeds, it returns `Ok(())`; otherwise, it returns
/// the first error with the line it occurred on.
///
/// # Errors
/// Returns an error if parsing or evaluation of any line fails.
///
/// # Examples
/// ```
/// use glyphic::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "result ← 2 + 2";
/// assert!(get_result(source, false).is_ok());
///
/// // Example with an intentional error (unassigned variable).
/// let source = "y ← x + 1";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Error> {
    let config = Config { auto_print,
                          ..Config::default() };
    let mut engine = Engine::with_config(config);

    let result = run_script(&mut engine, source)?;

    if engine.config().auto_print
       && let Some((line, value)) = result
    {
        let text = value.formatted(line)?;
        engine.output_mut().write_formatted(&text);
    }

    Ok(())
}
