/// Array storage and lazy array views.
///
/// Defines `Array`, whose elements are either stored or computed on access
/// from shared operand arrays.
pub mod array;

pub mod core;

/// Array shapes and row-major index arithmetic.
pub mod dimensions;

/// Text rendering of values.
pub mod format;
