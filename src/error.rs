/// Parsing errors.
///
/// Defines every way a line can be rejected before evaluation: malformed
/// parenthesization, trailing tokens, bad literals, misplaced operators and
/// runaway nesting. Evaluation itself cannot fail.
pub mod parse_error;

pub use parse_error::{ErrorKind, ParseError};
