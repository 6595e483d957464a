use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenCursor, parse_expression},
    },
};

/// Parses one line of tokens into an expression tree.
///
/// A line whose second token is `=` is an assignment. Its first token is
/// taken as the variable name as-is and is never parsed as an expression;
/// the rest of the line is the right-hand side. Any other line is a plain
/// expression. Either way, every token must be consumed.
///
/// # Parameters
/// - `tokens`: The complete token sequence for the line.
///
/// # Returns
/// The root [`Expr`] for the line.
///
/// # Errors
/// - `InvalidAssignmentTarget` if `=` follows an operator or parenthesis.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete parse.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use calc::interpreter::{lexer::tokenize, parser::statement::parse_line};
///
/// let expr = parse_line(&tokenize("x = 1 - 2 - 3")).unwrap();
/// assert_eq!(expr.to_string(), "x = ((1 - 2) - 3)");
///
/// assert!(parse_line(&tokenize("2 + 3)")).is_err());
/// ```
pub fn parse_line(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);

    if let Some(assignment) = parse_assignment(&mut cursor)? {
        return Ok(assignment);
    }

    let expr = parse_expression(&mut cursor)?;
    expect_end(&cursor)?;
    Ok(expr)
}

/// Parses `name = expression` if the line has that shape.
///
/// # Returns
/// - `Ok(Some(expr))` with an [`Expr::Assignment`] when the second token is
///   `=`.
/// - `Ok(None)` otherwise, leaving the cursor untouched.
fn parse_assignment(tokens: &mut TokenCursor<'_>) -> ParseResult<Option<Expr>> {
    let Some((Token::Equals, _)) = tokens.peek_second() else {
        return Ok(None);
    };

    let name = match tokens.advance() {
        Some((Token::Word(name), _)) => name.clone(),
        Some((tok, offset)) => {
            return Err(ParseError::InvalidAssignmentTarget { target: tok.lexeme().to_string(),
                                                             column: offset + 1, });
        },
        None => return Ok(None),
    };
    tokens.advance();

    let value = parse_expression(tokens)?;
    expect_end(tokens)?;

    Ok(Some(Expr::Assignment { name,
                               value: Box::new(value) }))
}

fn expect_end(tokens: &TokenCursor<'_>) -> ParseResult<()> {
    match tokens.peek() {
        None => Ok(()),
        Some((tok, offset)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  tok.lexeme().to_string(),
                                                       column: offset + 1, })
        },
    }
}
