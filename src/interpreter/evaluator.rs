/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the short-circuiting logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `eval` entry point that walks an expression tree against the
/// variable environment, and the evaluator's result type.
pub mod core;
