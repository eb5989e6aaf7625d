/// Default limit on parser nesting and on the view depth kept by assignment.
///
/// Parsing, evaluating and formatting an expression nested this deep must fit
/// a 2 MiB thread stack in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for an [`Engine`](crate::interpreter::evaluator::core::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest nesting of parentheses and function operands the parser
    /// accepts. Assigned arrays whose views nest deeper than this are
    /// materialized.
    pub max_depth:  usize,
    /// Print the value of the last statement when a script finishes.
    pub auto_print: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth:  DEFAULT_MAX_DEPTH,
               auto_print: false, }
    }
}

impl Config {
    #[must_use]
    pub const fn new(max_depth: usize, auto_print: bool) -> Self {
        Self { max_depth, auto_print }
    }
}
