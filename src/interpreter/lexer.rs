use logos::Logos;

/// Represents a lexical token in a calculator line.
///
/// Operators and parentheses are single characters. Everything else is
/// collected into a [`Token::Word`], which the parser later classifies as a
/// number or an identifier by its first character.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A raw number or identifier lexeme such as `42`, `1e-5` or `x1`.
    ///
    /// The first pattern is the exponent continuation: digits followed by `e`
    /// may swallow one `-`, so `1e-5` stays a single word.
    #[regex(r"[0-9]*e-[^ \t\n\r\f+\-*/=()]*", word, allow_greedy = true)]
    #[regex(r"[^ \t\n\r\f+\-*/=()]+", word, allow_greedy = true)]
    Word(String),
    /// Whitespace between tokens.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source text this token was produced from.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Word(text) => text,
            Self::Ignored => "",
        }
    }
}

fn word(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

/// Splits a line into tokens paired with their byte offset.
///
/// Tokenizing never fails. Input the lexer cannot match is kept as a
/// [`Token::Word`] so the parser can reject it with a position.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1e-5*2");
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Word("x".to_string()),
///                 Token::Equals,
///                 Token::Word("1e-5".to_string()),
///                 Token::Star,
///                 Token::Word("2".to_string())]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, start)),
            Err(()) => tokens.push((Token::Word(lexer.slice().to_string()), start)),
        }
    }

    tokens
}
