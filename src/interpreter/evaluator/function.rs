/// The `+ - × ÷` functions.
///
/// Each glyph pairs a monadic scalar function with a dyadic one.
pub mod arithmetic;
/// The `Function` trait, resolved function references and the builtin
/// registry.
pub mod core;
/// The `⍳` (index generator) function.
pub mod iota;
/// Output sinks used by `print`.
pub mod output;
/// The `print` function implementation.
///
/// Writes a value to the engine's output sink.
pub mod print;
/// The `⍴` (shape and reshape) function.
pub mod rho;
