use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser will descend into.
///
/// Each level costs six parser frames; 512 levels stay well inside the 2 MiB
/// stack of a spawned thread even in unoptimized builds.
pub const MAX_NESTING_DEPTH: usize = 512;

/// A read-only view of a line's tokens plus the current parse position.
///
/// The cursor is the only mutable state shared between the recursive
/// parsing functions. It also counts open parentheses so that pathological
/// nesting is rejected instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [(Token, usize)],
    pos:    usize,
    depth:  usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens,
               pos: 0,
               depth: 0 }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a (Token, usize)> {
        self.tokens.get(self.pos)
    }

    /// Returns the token after the current one without consuming anything.
    #[must_use]
    pub fn peek_second(&self) -> Option<&'a (Token, usize)> {
        self.tokens.get(self.pos + 1)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a (Token, usize)> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Index of the next token to be consumed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Column just past the last token, used when input ends too early.
    #[must_use]
    pub fn end_column(&self) -> usize {
        self.tokens
            .last()
            .map_or(1, |(tok, offset)| offset + tok.lexeme().len() + 1)
    }

    /// Records entry into a parenthesized group.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` past [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn enter_group(&mut self,
                                                      column: usize)
                                                      -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    column });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records exit from a parenthesized group.
    pub(in crate::interpreter::parser) fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition and subtraction, and descends from there.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_additive(tokens)
}
