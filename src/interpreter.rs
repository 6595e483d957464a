/// The evaluator module computes results from AST nodes.
///
/// The evaluator walks the tree bottom-up, applies arithmetic operators and
/// reads or writes variables in the [`evaluator::core::Environment`].
///
/// # Responsibilities
/// - Evaluates every expression variant to an `f64`.
/// - Binds variables on assignment and defaults unbound lookups to `0.0`.
/// - Leaves division by zero to IEEE-754 semantics.
pub mod evaluator;
/// The lexer module tokenizes a line for further parsing.
///
/// The lexer splits raw text into operators, parentheses and raw words, each
/// paired with its byte offset. It never fails; validation is left to the
/// parser.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over the grammar
/// `expr := term (("+" | "-") term)*`, `term := factor (("*" | "/") factor)*`,
/// `factor := "-"? primary`, `primary := number | identifier | "(" expr ")"`,
/// with assignment recognized at the start of a line.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] trees.
/// - Classifies raw words as numbers or identifiers.
/// - Reports malformed lines with the column of the offending token.
pub mod parser;
/// Line-by-line driver.
///
/// Owns an environment, skips blank lines and keeps the `last` variable up
/// to date.
pub mod session;
