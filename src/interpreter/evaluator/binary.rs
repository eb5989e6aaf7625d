/// Array operands: shape checks and view construction.
pub mod array;
/// Dispatch between scalar and array operands.
pub mod core;
/// Scalar arithmetic with integer overflow and division checks.
pub mod scalar;
