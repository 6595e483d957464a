//! # calc
//!
//! calc is an interactive arithmetic expression evaluator written in Rust.
//! Each input line is an expression such as `(2 + 3) * 4` or an assignment
//! such as `rate = 1e-3`; evaluating it yields a single `f64`. Variables
//! persist between lines, and the reserved variable `last` always holds the
//! previous line's result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Environment, lexer::tokenize, parser::statement::parse_line,
    },
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent a parsed line as a tree. The AST is built by the parser and
/// walked by the evaluator.
pub mod ast;
/// Provides the error types for rejected lines.
///
/// Every failure is a `ParseError` carrying the column of the offending
/// token. Evaluation itself never fails.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluating lines.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Holds the variable environment and the per-line session driver.
pub mod interpreter;
/// General utilities, such as result formatting.
pub mod util;

/// Tokenizes, parses and evaluates one line against `env`.
///
/// This is the core boundary: it does not skip blank input and does not
/// update `last`. Use [`interpreter::session::Session`] for line-by-line
/// processing.
///
/// # Errors
/// Returns a [`ParseError`] if the line is not a single complete expression
/// or assignment. In that case `env` is not modified.
///
/// # Examples
/// ```
/// use calc::{evaluate, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("2 + 3 * 4", &mut env).unwrap(), 14.0);
/// assert_eq!(evaluate("y = -(2 + 3)", &mut env).unwrap(), -5.0);
/// assert_eq!(evaluate("y * 2", &mut env).unwrap(), -10.0);
///
/// // Division by zero is not an error.
/// assert!(evaluate("1 / 0", &mut env).unwrap().is_infinite());
///
/// // Malformed input is.
/// assert!(evaluate("2 (3)", &mut env).is_err());
/// ```
pub fn evaluate(source: &str, env: &mut Environment) -> Result<f64, ParseError> {
    let tokens = tokenize(source);
    debug!("tokens: {tokens:?}");

    let expr = parse_line(&tokens)?;
    debug!("parsed {} nodes (assignment: {})", expr.node_count(), expr.is_assignment());

    Ok(env.eval(&expr))
}
