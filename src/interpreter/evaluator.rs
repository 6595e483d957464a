/// Core evaluation logic.
///
/// Contains the variable environment and the expression dispatcher.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Evaluates both operands in order and applies an arithmetic operator.
pub mod binary;
