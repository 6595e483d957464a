use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenCursor},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`. Each new
/// operand is folded onto the tree built so far, so `1 - 2 - 3` parses as
/// `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
///
/// # Errors
/// - `UnexpectedOpenParen` if a `(` follows an operand directly.
/// - Propagates any errors from operand parsing.
pub fn parse_additive(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let start = tokens.position();
    let mut left = parse_multiplicative(tokens)?;

    while tokens.position() > start {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.advance();
            let right = parse_multiplicative(tokens)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        reject_open_paren(tokens)?;
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let start = tokens.position();
    let mut left = parse_unary(tokens)?;

    while tokens.position() > start {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.advance();
            let right = parse_unary(tokens)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        reject_open_paren(tokens)?;
        break;
    }
    Ok(left)
}

/// A `(` directly after an operand is never valid, e.g. `2(3)`.
fn reject_open_paren(tokens: &TokenCursor<'_>) -> ParseResult<()> {
    if let Some((Token::LParen, offset)) = tokens.peek() {
        return Err(ParseError::UnexpectedOpenParen { column: offset + 1 });
    }
    Ok(())
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including `=`.
///
/// # Example
/// ```
/// use calc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
