//! Requirement tokenizer

use std::fmt;

use super::{Combinator, Operator};

/// A lexed requirement token. Operands borrow from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Operator(Operator),
    Combinator(Combinator),
    Operand(&'a str),
}

/// Deprecated syntax accepted by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deprecation {
    /// `!=`
    NotEqual,
    /// `!`, read as `!=`
    Bang,
}

impl Deprecation {
    /// The spelling found in the requirement
    pub fn syntax(&self) -> &'static str {
        match self {
            Deprecation::NotEqual => "!=",
            Deprecation::Bang => "!",
        }
    }
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inside version requirements is deprecated, use ~> or >= instead",
            self.syntax()
        )
    }
}

// Longest match first.
const TOKENS: &[(&str, Token<'static>)] = &[
    (">=", Token::Operator(Operator::GreaterThanOrEqual)),
    ("<=", Token::Operator(Operator::LessThanOrEqual)),
    ("~>", Token::Operator(Operator::Pessimistic)),
    (">", Token::Operator(Operator::GreaterThan)),
    ("<", Token::Operator(Operator::LessThan)),
    ("==", Token::Operator(Operator::Equal)),
    (" or ", Token::Combinator(Combinator::Or)),
    (" and ", Token::Combinator(Combinator::And)),
];

const DEPRECATED: &[(&str, Deprecation)] = &[("!=", Deprecation::NotEqual), ("!", Deprecation::Bang)];

/// Output of [`lex`]
#[derive(Debug, Default)]
pub(crate) struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub deprecations: Vec<Deprecation>,
}

/// Split a requirement into tokens.
///
/// Any run of characters that is neither an operator, a combinator nor a
/// space becomes an operand. An operand that does not directly follow a
/// comparison operator gets an implicit `==` in front of it.
pub(crate) fn lex(input: &str) -> Lexed<'_> {
    let mut lexed = Lexed::default();
    let mut buffer_start = 0;
    let mut pos = 0;

    'scan: while pos < input.len() {
        let rest = &input[pos..];

        for (text, token) in TOKENS {
            if rest.starts_with(text) {
                lexed.flush(&input[buffer_start..pos]);
                lexed.tokens.push(*token);
                pos += text.len();
                buffer_start = pos;
                continue 'scan;
            }
        }

        for (text, deprecation) in DEPRECATED {
            if rest.starts_with(text) {
                lexed.flush(&input[buffer_start..pos]);
                lexed.tokens.push(Token::Operator(Operator::NotEqual));
                lexed.deprecations.push(*deprecation);
                pos += text.len();
                buffer_start = pos;
                continue 'scan;
            }
        }

        if rest.starts_with(' ') {
            lexed.flush(&input[buffer_start..pos]);
            pos += 1;
            buffer_start = pos;
            continue;
        }

        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    lexed.flush(&input[buffer_start..]);
    lexed
}

impl<'a> Lexed<'a> {
    fn flush(&mut self, buffer: &'a str) {
        if buffer.is_empty() {
            return;
        }
        if !matches!(self.tokens.last(), Some(Token::Operator(_))) {
            self.tokens.push(Token::Operator(Operator::Equal));
        }
        self.tokens.push(Token::Operand(buffer));
    }
}
