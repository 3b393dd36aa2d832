/// Operator routing.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// `and` / `or`.
pub mod logic;
