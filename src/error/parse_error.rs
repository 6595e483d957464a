use thiserror::Error;

/// Broad classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tokens do not form a single complete expression.
    Syntax,
    /// Parentheses are nested deeper than the parser is willing to descend.
    RecursionLimit,
}

/// Represents all errors that can occur while parsing a line.
///
/// Columns are 1-based byte positions in the line. A column one past the
/// last token means the input ended too early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start an operand.
    #[error("Error at column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Where the token starts.
        column: usize,
    },
    /// Reached the end of the line while an operand was still expected.
    #[error("Error at column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Position just past the end of the line.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at column {column}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Where the `)` was expected.
        column: usize,
    },
    /// An opening parenthesis appeared where an operator was expected.
    #[error("Error at column {column}: Unexpected '(' where an operator was expected.")]
    UnexpectedOpenParen {
        /// Where the `(` is.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at column {column}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Where the extra token starts.
        column: usize,
    },
    /// A word starting with a digit is not a valid number.
    #[error("Error at column {column}: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The offending literal.
        literal: String,
        /// Where the literal starts.
        column:  usize,
    },
    /// The left-hand side of `=` is an operator or parenthesis.
    #[error("Error at column {column}: Cannot assign to '{target}'.")]
    InvalidAssignmentTarget {
        /// The offending target token.
        target: String,
        /// Where the target starts.
        column: usize,
    },
    /// Parentheses nest deeper than the parser allows.
    #[error("Error at column {column}: Expression is nested too deeply (limit is {limit}).")]
    NestingTooDeep {
        /// The maximum supported depth.
        limit:  usize,
        /// Where the first parenthesis past the limit starts.
        column: usize,
    },
}

impl ParseError {
    /// Returns the kind of failure this error represents.
    ///
    /// ## Example
    /// ```
    /// use calc::error::{ErrorKind, ParseError};
    ///
    /// let err = ParseError::ExpectedClosingParen { column: 5 };
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NestingTooDeep { .. } => ErrorKind::RecursionLimit,
            _ => ErrorKind::Syntax,
        }
    }

    /// Returns the 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column }
            | Self::ExpectedClosingParen { column }
            | Self::UnexpectedOpenParen { column }
            | Self::UnexpectedTrailingTokens { column, .. }
            | Self::InvalidNumber { column, .. }
            | Self::InvalidAssignmentTarget { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}
