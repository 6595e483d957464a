use calc::interpreter::lexer::{Token, tokenize};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn w(text: &str) -> Token {
    Token::Word(text.to_string())
}

fn kinds(line: &str) -> Vec<Token> {
    tokenize(line).into_iter().map(|(tok, _)| tok).collect()
}

#[rstest]
#[case("2+3*4", vec![w("2"), Token::Plus, w("3"), Token::Star, w("4")])]
#[case("(-x)/y", vec![Token::LParen, Token::Minus, w("x"), Token::RParen, Token::Slash, w("y")])]
#[case("total = 10", vec![w("total"), Token::Equals, w("10")])]
#[case("x-1", vec![w("x"), Token::Minus, w("1")])]
#[case("1abc", vec![w("1abc")])]
fn splits_on_operators_and_whitespace(#[case] line: &str, #[case] expected: Vec<Token>) {
    assert_eq!(kinds(line), expected);
}

#[rstest]
#[case("1e-5", vec![w("1e-5")])]
#[case("12e-3-4", vec![w("12e-3"), Token::Minus, w("4")])]
#[case("2*1e-2", vec![w("2"), Token::Star, w("1e-2")])]
#[case("e-1", vec![w("e-1")])]
#[case("1.5e-3", vec![w("1.5e"), Token::Minus, w("3")])]
#[case("1e+5", vec![w("1e"), Token::Plus, w("5")])]
#[case("ee-1", vec![w("ee"), Token::Minus, w("1")])]
#[case("1e5-2", vec![w("1e5"), Token::Minus, w("2")])]
fn exponent_minus_stays_in_word(#[case] line: &str, #[case] expected: Vec<Token>) {
    assert_eq!(kinds(line), expected);
}

#[test]
fn records_byte_offsets() {
    let tokens = tokenize("  x   =  5 ");
    assert_eq!(tokens,
               vec![(w("x"), 2), (Token::Equals, 6), (w("5"), 9)]);
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t  ").is_empty());
}

#[test]
fn never_fails_on_odd_characters() {
    assert_eq!(kinds("$ + _x"), vec![w("$"), Token::Plus, w("_x")]);
}

#[test]
fn lexeme_matches_source_text() {
    let line = "rate*(1e-3+b)";
    let rebuilt: String = tokenize(line).iter().map(|(tok, _)| tok.lexeme()).collect();
    assert_eq!(rebuilt, line);
}
