/// Unicode codepoint classification.
///
/// Letter, digit and whitespace predicates plus codepoint-to-text helpers used
/// by the tokenizer and the script runner.
pub mod charset;
/// Numeric conversion helpers.
///
/// This module provides checked conversions between `i64`, `usize` and `f64`
/// so counts, dimensions and indices never wrap silently.
///
/// All fallible functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or a `RuntimeError` if the value is out of range.
pub mod num;
