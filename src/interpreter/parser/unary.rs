use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenCursor, parse_expression},
    },
};

/// Parses a factor: a primary with an optional leading minus.
///
/// The minus applies to exactly one primary, never to a whole term, so
/// `-2 * 3` is `(-2) * 3` and a second minus (`--2`) is rejected.
///
/// Grammar:
/// ```text
///     unary := "-" primary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An [`Expr::UnaryMinus`] or a primary expression.
pub(crate) fn parse_unary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.advance();
        let operand = parse_primary(tokens)?;
        return Ok(Expr::UnaryMinus(Box::new(operand)));
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of a primary.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - `UnexpectedEndOfInput` if no tokens remain.
/// - `UnexpectedToken` for operators, `)` and `=`.
/// - Any error from [`parse_word`] or the grouped expression.
pub(crate) fn parse_primary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let Some((token, offset)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { column: tokens.end_column() });
    };

    match token {
        Token::LParen => parse_grouping(tokens),
        Token::Word(word) => {
            tokens.advance();
            parse_word(word, offset + 1)
        },
        tok => Err(ParseError::UnexpectedToken { token:  tok.lexeme().to_string(),
                                                 column: offset + 1, }),
    }
}

/// Parses `"(" expression ")"`.
///
/// # Errors
/// - `ExpectedClosingParen` if the group is not closed, including when the
///   line ends inside it.
/// - `NestingTooDeep` past the nesting limit.
fn parse_grouping(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let column = tokens.advance().map_or(1, |(_, offset)| offset + 1);
    tokens.enter_group(column)?;

    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.advance();
            tokens.leave_group();
            Ok(expr)
        },
        Some((_, offset)) => Err(ParseError::ExpectedClosingParen { column: offset + 1 }),
        None => Err(ParseError::ExpectedClosingParen { column: tokens.end_column() }),
    }
}

/// Classifies a raw word as a number or an identifier.
///
/// The first character decides: an ASCII digit makes a number, an ASCII
/// letter makes an identifier. The rest of the word is not inspected for
/// identifiers, so `e-5` and `x1` are both valid names.
///
/// # Parameters
/// - `word`: The raw lexeme.
/// - `column`: 1-based position of the word for error reporting.
///
/// # Errors
/// - `InvalidNumber` if a word starting with a digit is not a valid `f64`.
/// - `UnexpectedToken` if the word starts with anything else.
///
/// # Example
/// ```
/// use calc::{ast::Expr, interpreter::parser::unary::parse_word};
///
/// assert_eq!(parse_word("1e-3", 1).unwrap(), Expr::Number(0.001));
/// assert_eq!(parse_word("rate", 1).unwrap(), Expr::Variable("rate".to_string()));
/// assert!(parse_word("1abc", 1).is_err());
/// ```
pub fn parse_word(word: &str, column: usize) -> ParseResult<Expr> {
    match word.chars().next() {
        Some(c) if c.is_ascii_digit() => {
            word.parse()
                .map(Expr::Number)
                .map_err(|_| ParseError::InvalidNumber { literal: word.to_string(),
                                                         column })
        },
        Some(c) if c.is_ascii_alphabetic() => Ok(Expr::Variable(word.to_string())),
        _ => Err(ParseError::UnexpectedToken { token: word.to_string(),
                                               column }),
    }
}
