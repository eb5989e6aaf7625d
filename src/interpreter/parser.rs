/// Entry points of the recursive-descent parser.
///
/// Builds the executable instruction tree directly from the token stream,
/// resolving function symbols against the engine as it goes.
pub mod core;
/// Helpers shared by the parsing routines.
///
/// Operand reduction and the nesting-depth guard.
pub mod utils;
