/// Core parsing logic.
///
/// Contains the token cursor, the shared `ParseResult` type and the
/// expression entry point.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix minus, literals, identifiers and parenthesized groups.
pub mod unary;

/// Line-level parsing.
///
/// Recognizes assignments and makes sure a line is consumed completely.
pub mod statement;
