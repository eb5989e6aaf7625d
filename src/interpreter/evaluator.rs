/// Binary operator evaluation logic.
///
/// Applies the dyadic arithmetic functions to scalars and builds the lazy
/// elementwise views for arrays.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements conjugate, negate, direction and reciprocal.
pub mod unary;

/// Core evaluation logic and engine state.
///
/// Contains the `Engine`, which owns symbols, function bindings, variables
/// and the output sink, and walks instruction trees.
pub mod core;

/// Operators shared by the arithmetic functions and the array views.
pub mod operator;

/// Function evaluation.
///
/// The `Function` trait, the builtin functions and their registration.
pub mod function;
