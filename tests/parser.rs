use calc::{
    ast::{BinaryOperator, Expr},
    error::{ErrorKind, ParseError},
    interpreter::{
        lexer::tokenize,
        parser::{core::MAX_NESTING_DEPTH, statement::parse_line},
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse(line: &str) -> Result<Expr, ParseError> {
    parse_line(&tokenize(line))
}

#[rstest]
#[case("2+3*4", "(2 + (3 * 4))")]
#[case("(2+3)*4", "((2 + 3) * 4)")]
#[case("1-2-3", "((1 - 2) - 3)")]
#[case("8/4/2", "((8 / 4) / 2)")]
#[case("1-2+3", "((1 - 2) + 3)")]
#[case("-2*3", "(-2 * 3)")]
#[case("2*-3", "(2 * -3)")]
#[case("-(2+3)", "-(2 + 3)")]
#[case("a - -b", "(a - -b)")]
#[case("((x))", "x")]
fn respects_precedence_and_associativity(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(parse(line).unwrap().to_string(), expected);
}

#[test]
fn builds_binary_tree() {
    let expected = Expr::binary(BinaryOperator::Add,
                                Expr::Number(1.0),
                                Expr::binary(BinaryOperator::Mul,
                                             Expr::Variable("x".to_string()),
                                             Expr::Number(0.5)));
    assert_eq!(parse("1 + x * 0.5").unwrap(), expected);
}

#[test]
fn classifies_words_by_first_character() {
    assert_eq!(parse("1e-5").unwrap(), Expr::Number(1e-5));
    assert_eq!(parse("x1").unwrap(), Expr::Variable("x1".to_string()));
    assert_eq!(parse("e-1").unwrap(), Expr::Variable("e-1".to_string()));
}

#[test]
fn assignment_at_line_start() {
    let expr = parse("x = 1 + y").unwrap();
    assert!(expr.is_assignment());
    assert_eq!(expr.to_string(), "x = (1 + y)");
}

#[test]
fn assignment_target_is_taken_verbatim() {
    let expr = parse("5 = 2").unwrap();
    assert_eq!(expr,
               Expr::Assignment { name:  "5".to_string(),
                                  value: Box::new(Expr::Number(2.0)), });
}

#[test]
fn equals_elsewhere_is_not_assignment() {
    assert_eq!(parse("1 + x = 2"),
               Err(ParseError::UnexpectedTrailingTokens { token:  "=".to_string(),
                                                          column: 7, }));
}

#[rstest]
#[case("(2+3", ParseError::ExpectedClosingParen { column: 5 })]
#[case("(2 3)", ParseError::ExpectedClosingParen { column: 4 })]
#[case("2+3)", ParseError::UnexpectedTrailingTokens { token: ")".to_string(), column: 4 })]
#[case("2 3", ParseError::UnexpectedTrailingTokens { token: "3".to_string(), column: 3 })]
#[case("2(3)", ParseError::UnexpectedOpenParen { column: 2 })]
#[case("2*(3)(4)", ParseError::UnexpectedOpenParen { column: 6 })]
#[case("2+", ParseError::UnexpectedEndOfInput { column: 3 })]
#[case("*2", ParseError::UnexpectedToken { token: "*".to_string(), column: 1 })]
#[case("--2", ParseError::UnexpectedToken { token: "-".to_string(), column: 2 })]
#[case("()", ParseError::UnexpectedToken { token: ")".to_string(), column: 2 })]
#[case("1abc", ParseError::InvalidNumber { literal: "1abc".to_string(), column: 1 })]
#[case("1.5e-3", ParseError::InvalidNumber { literal: "1.5e".to_string(), column: 1 })]
#[case("_x", ParseError::UnexpectedToken { token: "_x".to_string(), column: 1 })]
#[case("x = = (", ParseError::UnexpectedToken { token: "=".to_string(), column: 5 })]
#[case("x =", ParseError::UnexpectedEndOfInput { column: 4 })]
#[case("x = 1 2", ParseError::UnexpectedTrailingTokens { token: "2".to_string(), column: 7 })]
#[case("( = 3", ParseError::InvalidAssignmentTarget { target: "(".to_string(), column: 1 })]
fn rejects_malformed_lines(#[case] line: &str, #[case] expected: ParseError) {
    let err = parse(line).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err, expected);
}

#[test]
fn empty_line_is_rejected() {
    assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { column: 1 }));
}

#[test]
fn accepts_nesting_up_to_limit() {
    let line = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(parse(&line).unwrap(), Expr::Number(1.0));
}

#[test]
fn rejects_runaway_nesting() {
    let depth = MAX_NESTING_DEPTH + 1;
    let line = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let err = parse(&line).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
    assert_eq!(err.column(), depth);
}

#[test]
fn rejects_unterminated_nesting() {
    let err = parse(&"(".repeat(10_000)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
}

#[test]
fn long_chains_parse_without_recursion() {
    let expr = parse(&format!("{}1", "1-".repeat(1_000_000))).unwrap();
    assert_eq!(expr.node_count(), 2_000_001);
}
